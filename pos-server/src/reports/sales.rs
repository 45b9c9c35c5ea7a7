//! Sales report (销售报表)

use std::collections::{BTreeMap, HashMap};

use chrono::Timelike;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderStatus, PaymentMethod};

use crate::pricing::{to_decimal, to_f64};
use crate::utils::time::to_local;

/// Number of entries in the best-sellers list
pub const TOP_ITEMS_LIMIT: usize = 10;

/// Report window in Unix millis, `[start, end)`; open ends are unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl ReportRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start.is_none_or(|s| timestamp >= s) && self.end.is_none_or(|e| timestamp < e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySales {
    /// Local hour of day (0-23)
    pub hour: u32,
    pub sales: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    /// Local date, `YYYY-MM-DD`
    pub date: String,
    pub sales: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSales {
    pub menu_item_id: i64,
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodSales {
    pub method: PaymentMethod,
    pub label: String,
    pub count: usize,
    pub amount: f64,
}

/// Sales report over the non-cancelled orders of a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub range: ReportRange,
    pub timezone: String,
    /// Σ order total
    pub total_sales: f64,
    pub order_count: usize,
    pub average_ticket: f64,
    /// Σ line item quantity
    pub total_items: u64,
    /// Hours with sales only, ascending
    pub sales_by_hour: Vec<HourlySales>,
    pub sales_by_day: Vec<DailySales>,
    /// Best sellers by revenue (at most [`TOP_ITEMS_LIMIT`])
    pub top_items: Vec<ItemSales>,
    pub category_sales: Vec<CategorySales>,
    /// From recorded payments (paid orders only)
    pub payment_methods: Vec<PaymentMethodSales>,
}

#[derive(Default)]
struct Bucket {
    sales: Decimal,
    orders: usize,
}

impl Bucket {
    fn add(&mut self, amount: Decimal) {
        self.sales += amount;
        self.orders += 1;
    }
}

struct ItemAcc {
    name: String,
    category: String,
    quantity: u64,
    revenue: Decimal,
}

/// 按时间、菜品、分类和支付方式汇总销售额
///
/// Line revenue is `quantity × unit_price` as captured on the order, so
/// item and category revenue ignore discounts, tax and tips while
/// `total_sales` is the sum of order totals.
pub fn sales_report(orders: &[Order], range: ReportRange, tz: Tz) -> SalesReport {
    let included: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled && range.contains(o.created_at))
        .collect();

    let mut total_sales = Decimal::ZERO;
    let mut total_items = 0u64;
    let mut by_hour: BTreeMap<u32, Bucket> = BTreeMap::new();
    let mut by_day: BTreeMap<String, Bucket> = BTreeMap::new();
    let mut items: HashMap<i64, ItemAcc> = HashMap::new();
    let mut payments: HashMap<PaymentMethod, Bucket> = HashMap::new();

    for order in &included {
        let total = to_decimal(order.total);
        total_sales += total;
        total_items += order.item_count();

        let local = to_local(order.created_at, tz);
        by_hour.entry(local.hour()).or_default().add(total);
        by_day
            .entry(local.format("%Y-%m-%d").to_string())
            .or_default()
            .add(total);

        for line in &order.items {
            let acc = items.entry(line.menu_item.id).or_insert_with(|| ItemAcc {
                name: line.menu_item.name.clone(),
                category: line.menu_item.category.clone(),
                quantity: 0,
                revenue: Decimal::ZERO,
            });
            acc.quantity += u64::from(line.quantity);
            acc.revenue += to_decimal(line.unit_price) * Decimal::from(line.quantity);
        }

        if let Some(payment) = &order.payment {
            payments
                .entry(payment.method)
                .or_default()
                .add(to_decimal(payment.amount));
        }
    }

    let order_count = included.len();
    let average_ticket = if order_count > 0 {
        to_f64(total_sales / Decimal::from(order_count))
    } else {
        0.0
    };

    let sales_by_hour = by_hour
        .into_iter()
        .filter(|(_, b)| b.sales > Decimal::ZERO)
        .map(|(hour, b)| HourlySales {
            hour,
            sales: to_f64(b.sales),
            orders: b.orders,
        })
        .collect();

    let sales_by_day = by_day
        .into_iter()
        .map(|(date, b)| DailySales {
            date,
            sales: to_f64(b.sales),
            orders: b.orders,
        })
        .collect();

    // 分类汇总
    let mut categories: BTreeMap<String, (u64, Decimal)> = BTreeMap::new();
    for acc in items.values() {
        let entry = categories.entry(acc.category.clone()).or_default();
        entry.0 += acc.quantity;
        entry.1 += acc.revenue;
    }
    let mut category_sales: Vec<CategorySales> = categories
        .into_iter()
        .map(|(category, (quantity, revenue))| CategorySales {
            category,
            quantity,
            revenue: to_f64(revenue),
        })
        .collect();
    category_sales.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.category.cmp(&b.category))
    });

    let mut ranked: Vec<(i64, ItemAcc)> = items.into_iter().collect();
    ranked.sort_by(|(a_id, a), (b_id, b)| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a_id.cmp(b_id))
    });
    let top_items = ranked
        .into_iter()
        .take(TOP_ITEMS_LIMIT)
        .map(|(menu_item_id, acc)| ItemSales {
            menu_item_id,
            name: acc.name,
            category: acc.category,
            quantity: acc.quantity,
            revenue: to_f64(acc.revenue),
        })
        .collect();

    let payment_methods = PaymentMethod::ALL
        .iter()
        .filter_map(|method| {
            payments.get(method).map(|b| PaymentMethodSales {
                method: *method,
                label: method.label().to_string(),
                count: b.orders,
                amount: to_f64(b.sales),
            })
        })
        .collect();

    SalesReport {
        range,
        timezone: tz.name().to_string(),
        total_sales: to_f64(total_sales),
        order_count,
        average_ticket,
        total_items,
        sales_by_hour,
        sales_by_day,
        top_items,
        category_sales,
        payment_methods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{DAY, HOUR, burger, coke, menu_item, order, paid, pizza};

    fn sample_orders() -> Vec<Order> {
        vec![
            // 12:00, 2 burgers + 2 cokes = 81.80
            paid(
                order("o1", OrderStatus::Pending, DAY + 12 * HOUR, &[(burger(), 2), (coke(), 2)]),
                PaymentMethod::Cash,
            ),
            // 12:30, 1 pizza = 45.00
            paid(
                order("o2", OrderStatus::Pending, DAY + 12 * HOUR + HOUR / 2, &[(pizza(), 1)]),
                PaymentMethod::Pix,
            ),
            // 20:00, still open: 1 burger = 35.90
            order("o3", OrderStatus::Preparing, DAY + 20 * HOUR, &[(burger(), 1)]),
            // cancelled: ignored
            order("o4", OrderStatus::Cancelled, DAY + 13 * HOUR, &[(pizza(), 3)]),
            // next day 09:00: 1 coke = 5.00
            paid(
                order("o5", OrderStatus::Pending, DAY + 33 * HOUR, &[(coke(), 1)]),
                PaymentMethod::Cash,
            ),
        ]
    }

    #[test]
    fn test_report_totals_skip_cancelled_orders() {
        let report = sales_report(&sample_orders(), ReportRange::default(), Tz::UTC);

        assert_eq!(report.order_count, 4);
        assert_eq!(report.total_sales, 167.70);
        assert_eq!(report.total_items, 7);
        assert_eq!(report.average_ticket, 41.93);
        assert_eq!(report.timezone, "UTC");
    }

    #[test]
    fn test_sales_by_hour_and_day() {
        let report = sales_report(&sample_orders(), ReportRange::default(), Tz::UTC);

        let hours: Vec<(u32, f64, usize)> = report
            .sales_by_hour
            .iter()
            .map(|h| (h.hour, h.sales, h.orders))
            .collect();
        assert_eq!(hours, vec![(9, 5.00, 1), (12, 126.80, 2), (20, 35.90, 1)]);

        assert_eq!(report.sales_by_day.len(), 2);
        assert_eq!(report.sales_by_day[0].date, "2024-03-15");
        assert_eq!(report.sales_by_day[0].sales, 162.70);
        assert_eq!(report.sales_by_day[1].date, "2024-03-16");
        assert_eq!(report.sales_by_day[1].orders, 1);
    }

    #[test]
    fn test_hours_follow_business_timezone() {
        let sp = chrono_tz::America::Sao_Paulo;
        let report = sales_report(&sample_orders(), ReportRange::default(), sp);

        // UTC-3
        let hours: Vec<u32> = report.sales_by_hour.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![6, 9, 17]);
    }

    #[test]
    fn test_range_is_half_open() {
        let range = ReportRange::new(Some(DAY), Some(DAY + 24 * HOUR));
        let report = sales_report(&sample_orders(), range, Tz::UTC);
        assert_eq!(report.order_count, 3);
        assert_eq!(report.total_sales, 162.70);

        let range = ReportRange::new(Some(DAY + 12 * HOUR), Some(DAY + 12 * HOUR + 1));
        let report = sales_report(&sample_orders(), range, Tz::UTC);
        assert_eq!(report.order_count, 1);
    }

    #[test]
    fn test_top_items_and_categories() {
        let report = sales_report(&sample_orders(), ReportRange::default(), Tz::UTC);

        let top: Vec<(&str, u64, f64)> = report
            .top_items
            .iter()
            .map(|i| (i.name.as_str(), i.quantity, i.revenue))
            .collect();
        assert_eq!(
            top,
            vec![
                ("Hambúrguer Artesanal", 3, 107.70),
                ("Pizza Margherita", 1, 45.00),
                ("Coca-Cola", 3, 15.00),
            ]
        );

        assert_eq!(report.category_sales[0].category, "Hambúrgueres");
        assert_eq!(report.category_sales[2].category, "Bebidas");
        assert_eq!(report.category_sales[2].quantity, 3);
    }

    #[test]
    fn test_top_items_are_capped() {
        let orders: Vec<Order> = (0..15)
            .map(|i| {
                let item = menu_item(100 + i, &format!("Prato {:02}", i), "Pratos", 10.0 + i as f64);
                order(&format!("o{}", i), OrderStatus::Served, DAY, &[(item, 1)])
            })
            .collect();

        let report = sales_report(&orders, ReportRange::default(), Tz::UTC);
        assert_eq!(report.top_items.len(), TOP_ITEMS_LIMIT);
        assert_eq!(report.top_items[0].name, "Prato 14");
        assert_eq!(report.category_sales.len(), 1);
    }

    #[test]
    fn test_payment_methods_come_from_payment_records() {
        let report = sales_report(&sample_orders(), ReportRange::default(), Tz::UTC);

        let methods: Vec<(PaymentMethod, usize, f64)> = report
            .payment_methods
            .iter()
            .map(|m| (m.method, m.count, m.amount))
            .collect();
        assert_eq!(
            methods,
            vec![(PaymentMethod::Cash, 2, 86.80), (PaymentMethod::Pix, 1, 45.00)]
        );
        assert_eq!(report.payment_methods[0].label, "Dinheiro");
    }

    #[test]
    fn test_empty_report() {
        let report = sales_report(&[], ReportRange::default(), Tz::UTC);
        assert_eq!(report.order_count, 0);
        assert_eq!(report.average_ticket, 0.0);
        assert!(report.sales_by_hour.is_empty());
        assert!(report.top_items.is_empty());
    }

    #[test]
    fn test_item_counts_exceed_u32_across_history() {
        let orders = vec![
            order("big-1", OrderStatus::Served, DAY, &[(coke(), u32::MAX)]),
            order("big-2", OrderStatus::Served, DAY + HOUR, &[(coke(), u32::MAX)]),
        ];
        let report = sales_report(&orders, ReportRange::default(), Tz::UTC);

        let expected = 2 * u64::from(u32::MAX);
        assert_eq!(report.total_items, expected);
        assert_eq!(report.top_items[0].quantity, expected);
        assert_eq!(report.category_sales[0].quantity, expected);
    }
}
