//! Seed data for demos and tests.

use domain::{Money, PaymentInfo, Product, User};

use crate::catalog::InMemoryProductCatalog;
use crate::users::InMemoryUserDirectory;

/// The three products of the sample catalog.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("P001", "Laptop", Money::from_dollars(1200), 10),
        Product::new("P002", "Smartphone", Money::from_dollars(800), 15),
        Product::new("P003", "Headphones", Money::from_dollars(150), 20),
    ]
}

/// The single sample user with valid card details.
pub fn sample_users() -> Vec<User> {
    vec![User::new(
        "U001",
        "John Doe",
        "john@example.com",
        "123 Main St",
        PaymentInfo::new("1234-5678-9012-3456", "12/25", "123"),
    )]
}

pub fn sample_catalog() -> InMemoryProductCatalog {
    InMemoryProductCatalog::with_products(sample_products())
}

pub fn sample_directory() -> InMemoryUserDirectory {
    InMemoryUserDirectory::with_users(sample_users())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProductRepository, UserRepository};
    use domain::{ProductId, UserId};

    #[test]
    fn test_sample_catalog_contents() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);

        let laptop = catalog.get_product(&ProductId::new("P001")).unwrap();
        assert_eq!(laptop.price(), Money::from_dollars(1200));
        assert_eq!(laptop.stock_quantity(), 10);
    }

    #[test]
    fn test_sample_user_has_valid_card() {
        let user = sample_directory().get_user(&UserId::new("U001")).unwrap();
        assert!(user.payment_info.validate().is_ok());
    }
}
