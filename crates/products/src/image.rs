//! Placeholder images for products without an explicit image.
//!
//! Resolution is a pure function of (category, name): a keyword in the name
//! picks a fixed image, otherwise a stable hash of the name picks one of the
//! category's candidates. The hash must match the storefront's bit-for-bit
//! (32-bit wrapping arithmetic over UTF-16 code units) or the same product
//! would show different placeholders in different places.

/// Category used when the requested one has no candidate list.
pub const DEFAULT_CATEGORY: &str = "Electronics";

/// Categories with their own placeholder candidates.
pub const KNOWN_CATEGORIES: [&str; 6] =
    ["Electronics", "Accessories", "Clothing", "Books", "Home", "Sports"];

const LAPTOP: &str = "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=300&h=300&fit=crop";
const PHONE: &str = "https://images.unsplash.com/photo-1601593346740-925612772716?w=300&h=300&fit=crop";
const MOUSE: &str = "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=300&h=300&fit=crop";
const KEYBOARD: &str = "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=300&h=300&fit=crop";
const HEADPHONE: &str = "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=300&h=300&fit=crop";
const WATCH: &str = "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=300&h=300&fit=crop";
const CAMERA: &str = "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=300&h=300&fit=crop";
const TABLET: &str = "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=300&h=300&fit=crop";

/// Keyword table, checked in order; the first hit wins.
///
/// `phone` precedes `headphone`, so headphones get the phone image.
const KEYWORDS: [(&[&str], &str); 8] = [
    (&["laptop"], LAPTOP),
    (&["phone", "case"], PHONE),
    (&["mouse"], MOUSE),
    (&["keyboard"], KEYBOARD),
    (&["headphone"], HEADPHONE),
    (&["watch"], WATCH),
    (&["camera"], CAMERA),
    (&["tablet"], TABLET),
];

const ELECTRONICS: &[&str] = &[
    "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1484704849700-f032a568e944?w=300&h=300&fit=crop",
];

const ACCESSORIES: &[&str] = &[
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=300&h=300&fit=crop",
];

const CLOTHING: &[&str] = &[
    "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=300&h=300&fit=crop",
];

const BOOKS: &[&str] = &["https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=300&fit=crop"];
const HOME: &[&str] = &["https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=300&h=300&fit=crop"];
const SPORTS: &[&str] = &["https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=300&h=300&fit=crop"];

/// Candidate placeholders for a category (unknown categories use Electronics).
pub fn category_candidates(category: &str) -> &'static [&'static str] {
    match category {
        "Accessories" => ACCESSORIES,
        "Clothing" => CLOTHING,
        "Books" => BOOKS,
        "Home" => HOME,
        "Sports" => SPORTS,
        _ => ELECTRONICS,
    }
}

/// Fixed image for the first keyword contained in `name`, if any.
pub fn keyword_image(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lowered.contains(*w)))
        .map(|(_, url)| *url)
}

/// 32-bit string hash: `h = (h << 5) - h + unit` over UTF-16 code units.
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    })
}

/// Resolve the placeholder image for a product.
pub fn resolve_image(category: &str, product_name: &str) -> &'static str {
    if let Some(url) = keyword_image(product_name) {
        return url;
    }

    let candidates = category_candidates(category);
    let index = name_hash(product_name).unsigned_abs() as usize % candidates.len();
    candidates[index]
}
