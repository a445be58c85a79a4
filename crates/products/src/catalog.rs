//! Seed catalog for an empty store.

use crate::product::Product;

/// Products created when the backend reports an empty catalog.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new("Laptop Pro", "Electronics", 45, 999.0)
            .with_min_level(10)
            .with_image("https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=300&h=300&fit=crop&crop=center"),
        Product::new("iPhone Case", "Accessories", 5, 25.0)
            .with_min_level(20)
            .with_image("https://images.unsplash.com/photo-1601593346740-925612772716?w=300&h=300&fit=crop&crop=center"),
        Product::new("Wireless Mouse", "Electronics", 30, 50.0)
            .with_min_level(15)
            .with_image("https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=300&h=300&fit=crop&crop=center"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StockStatus;

    #[test]
    fn seed_products_are_valid_and_unsaved() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        for product in &catalog {
            assert!(product.validate().is_ok());
            assert!(product.id.is_none());
            assert!(product.explicit_image().is_some());
        }
    }

    #[test]
    fn seed_case_starts_low() {
        let catalog = default_catalog();
        let case = catalog.iter().find(|p| p.name == "iPhone Case").unwrap();
        assert_eq!(case.stock_status(), StockStatus::Low);
    }
}
