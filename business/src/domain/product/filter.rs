use super::model::Product;

/// Optional predicates for listing products. Absent predicates pass everything;
/// present ones are ANDed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    /// Any of these, trimmed and case-insensitive, as a substring of the category.
    pub categories: Option<Vec<String>>,
    /// `true` keeps stock > 0, `false` keeps stock <= 0.
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.categories.as_ref().is_none_or(|c| c.is_empty())
            && self.in_stock.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_name(product) && self.matches_category(product) && self.matches_stock(product)
    }

    /// Keeps the relative order of the surviving records.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_name(&self, product: &Product) -> bool {
        match &self.name {
            Some(name) => product
                .name
                .to_lowercase()
                .contains(&name.to_lowercase()),
            None => true,
        }
    }

    fn matches_category(&self, product: &Product) -> bool {
        let categories = match &self.categories {
            Some(c) if !c.is_empty() => c,
            _ => return true,
        };
        let category = product.category.trim().to_lowercase();
        categories
            .iter()
            .any(|wanted| category.contains(&wanted.trim().to_lowercase()))
    }

    fn matches_stock(&self, product: &Product) -> bool {
        match self.in_stock {
            Some(true) => product.stock_quantity > 0,
            Some(false) => product.stock_quantity <= 0,
            None => true,
        }
    }
}
