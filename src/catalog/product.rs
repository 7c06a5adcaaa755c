//! Product shapes for the pizza catalog.

use serde::{Deserialize, Serialize};

/// Pizza diameter, one of the three sizes the storefront sells.
///
/// Serializes as the bare centimeter string (`"20"`, `"30"`, `"40"`),
/// the format the catalog JSON uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductSize {
    #[serde(rename = "20")]
    Cm20,
    #[serde(rename = "30")]
    Cm30,
    #[serde(rename = "40")]
    Cm40,
}

impl ProductSize {
    /// Position in a product's price triple.
    pub fn index(self) -> usize {
        match self {
            ProductSize::Cm20 => 0,
            ProductSize::Cm30 => 1,
            ProductSize::Cm40 => 2,
        }
    }

    /// Diameter in centimeters.
    pub fn diameter_cm(self) -> u8 {
        match self {
            ProductSize::Cm20 => 20,
            ProductSize::Cm30 => 30,
            ProductSize::Cm40 => 40,
        }
    }

    /// The label the catalog JSON uses for this size.
    pub fn label(self) -> &'static str {
        match self {
            ProductSize::Cm20 => "20",
            ProductSize::Cm30 => "30",
            ProductSize::Cm40 => "40",
        }
    }
}

/// Catalog category a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Hot,
    Vegan,
    Cheese,
    Meat,
}

/// A catalog product with per-size pricing.
///
/// `prices` holds one price per size position; a product may offer only
/// a subset of sizes (`sizes`), but the triple is always fully
/// populated so size→price addressing stays positional.
///
/// # Example
///
/// ```rust
/// use bemuse::{Product, ProductSize, ProductType};
///
/// let margherita = Product {
///     id: 1,
///     title: "Margherita".to_string(),
///     subtitle: "Tomato, mozzarella, basil".to_string(),
///     sizes: vec![ProductSize::Cm20, ProductSize::Cm30],
///     prices: [390, 540, 720],
///     kind: ProductType::Cheese,
///     image: "/images/margherita.png".to_string(),
///     image_alt: None,
/// };
///
/// assert_eq!(margherita.price_for(ProductSize::Cm30), 540);
/// assert!(!margherita.offered_in(ProductSize::Cm40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    #[serde(rename = "size")]
    pub sizes: Vec<ProductSize>,
    #[serde(rename = "price")]
    pub prices: [u32; 3],
    #[serde(rename = "type")]
    pub kind: ProductType,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

impl Product {
    /// Returns the price for a size, whether or not the product offers it.
    pub fn price_for(&self, size: ProductSize) -> u32 {
        self.prices[size.index()]
    }

    /// Returns true if the product is sold in `size`.
    pub fn offered_in(&self, size: ProductSize) -> bool {
        self.sizes.contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pepperoni() -> Product {
        Product {
            id: 7,
            title: "Pepperoni".to_string(),
            subtitle: "Pepperoni, mozzarella, tomato sauce".to_string(),
            sizes: vec![ProductSize::Cm20, ProductSize::Cm30, ProductSize::Cm40],
            prices: [450, 620, 810],
            kind: ProductType::Meat,
            image: "/images/pepperoni.png".to_string(),
            image_alt: Some("Pepperoni pizza".to_string()),
        }
    }

    #[test]
    fn test_price_for_each_size() {
        let p = pepperoni();
        assert_eq!(p.price_for(ProductSize::Cm20), 450);
        assert_eq!(p.price_for(ProductSize::Cm30), 620);
        assert_eq!(p.price_for(ProductSize::Cm40), 810);
    }

    #[test]
    fn test_offered_in() {
        let mut p = pepperoni();
        p.sizes = vec![ProductSize::Cm30];
        assert!(p.offered_in(ProductSize::Cm30));
        assert!(!p.offered_in(ProductSize::Cm40));
    }

    #[test]
    fn test_size_serde_uses_centimeter_strings() {
        let json = serde_json::to_string(&ProductSize::Cm30).unwrap();
        assert_eq!(json, r#""30""#);
        let back: ProductSize = serde_json::from_str(r#""40""#).unwrap();
        assert_eq!(back, ProductSize::Cm40);
    }

    #[test]
    fn test_type_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&ProductType::Vegan).unwrap(), r#""vegan""#);
        let back: ProductType = serde_json::from_str(r#""hot""#).unwrap();
        assert_eq!(back, ProductType::Hot);
    }

    #[test]
    fn test_product_json_field_names() {
        let json = serde_json::to_value(pepperoni()).unwrap();
        assert_eq!(json["type"], "meat");
        assert_eq!(json["size"][0], "20");
        assert_eq!(json["price"][2], 810);
        assert_eq!(json["imageAlt"], "Pepperoni pizza");
    }

    #[test]
    fn test_product_image_alt_optional() {
        let json = r#"{
            "id": 1,
            "title": "Margherita",
            "subtitle": "Classic",
            "size": ["20", "30"],
            "price": [390, 540, 720],
            "type": "cheese",
            "image": "/images/margherita.png"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.image_alt, None);
        assert_eq!(p.kind, ProductType::Cheese);

        let back = serde_json::to_value(&p).unwrap();
        assert!(back.get("imageAlt").is_none());
    }

    #[test]
    fn test_size_index_and_diameter() {
        assert_eq!(ProductSize::Cm20.index(), 0);
        assert_eq!(ProductSize::Cm40.index(), 2);
        assert_eq!(ProductSize::Cm30.diameter_cm(), 30);
        assert_eq!(ProductSize::Cm20.label(), "20");
    }
}
