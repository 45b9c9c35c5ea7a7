//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity (顾客)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_payment_method: Option<String>,
    pub loyalty_points: i64,
    pub created_at: i64,
}

impl Customer {
    /// Default delivery address, falling back to the first one
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// Single-line form used on delivery records
    pub fn one_line(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.number);
        if let Some(c) = self.complement.as_deref().filter(|c| !c.is_empty()) {
            line.push_str(" - ");
            line.push_str(c);
        }
        line.push_str(&format!(
            ", {}, {} - {}, {}",
            self.neighborhood, self.city, self.state, self.zip_code
        ));
        line
    }
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    pub preferred_payment_method: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_one_line() {
        let addr = Address {
            street: "Rua das Flores".to_string(),
            number: "123".to_string(),
            complement: Some("Apto 45".to_string()),
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01234-567".to_string(),
            is_default: true,
        };
        assert_eq!(
            addr.one_line(),
            "Rua das Flores, 123 - Apto 45, Centro, São Paulo - SP, 01234-567"
        );
    }
}
