//! Template catalogs for image prompts and captions.
//!
//! Selection is positional: the same `(category, seed)` always yields the
//! same text. Unknown categories fall back to the default category's list.

use contentplan_domain::constants::{DEFAULT_CATEGORY, DESCRIPTION_EXCERPT_WORDS};

const LIFESTYLE_PROMPTS: &[&str] = &[
    "A minimalist workspace with natural light streaming in",
    "Morning coffee ritual with a book and houseplant",
    "Cozy evening setting with soft lighting and blankets",
    "Clean, organized shelves with decorative items",
];

const FASHION_PROMPTS: &[&str] = &[
    "Street style outfit with statement accessories against urban backdrop",
    "Layered outfit flatlay on neutral background",
    "Close-up of textured fabric and unique jewelry",
    "Monochromatic outfit with pop of color accessory",
];

const FOOD_PROMPTS: &[&str] = &[
    "Overhead shot of colorful breakfast bowl with fruits",
    "Steaming cup of coffee with pastry on rustic wooden table",
    "Close-up of homemade pasta with fresh herbs",
    "Artfully arranged dinner plate with vibrant vegetables",
];

const TRAVEL_PROMPTS: &[&str] = &[
    "Sunset view from mountain peak with silhouetted figure",
    "Narrow alleyway in historic city with unique architecture",
    "Beachside hammock with ocean view",
    "Local market with vibrant colors and textures",
];

const FITNESS_PROMPTS: &[&str] = &[
    "Morning yoga pose in bright, minimal space",
    "Post-workout healthy meal prep with fresh ingredients",
    "Workout equipment flatlay on light background",
    "Action shot of running shoes on trail with nature backdrop",
];

const TECH_PROMPTS: &[&str] = &[
    "Clean workspace with latest gadgets arranged neatly",
    "Close-up of new technology with minimal background",
    "Tech accessories organized aesthetically",
    "Person using device in creative environment",
];

const BEAUTY_PROMPTS: &[&str] = &[
    "Skincare products arranged aesthetically on marble surface",
    "Close-up of eye makeup with complementary colors",
    "Natural beauty products with botanical elements",
    "Morning skincare routine flatlay with fresh flowers",
];

const BUSINESS_PROMPTS: &[&str] = &[
    "Productive workspace with notebook and coffee",
    "Person working on laptop in modern cafe setting",
    "Close-up of handwritten goals and planning",
    "Business meeting in bright, creative space",
];

/// Caption templates; `{type}` and `{description}` are substituted.
pub const CAPTION_TEMPLATES: &[&str] = &[
    "✨ {description} #lovewhatyoudo #authentic",
    "Today's {type} inspiration: {description}. What's your favorite? 💭 #share #connect",
    "Creating moments that matter through {description}. #purpose #passion",
    "Finding joy in {description}. What brings you joy today? ✨",
    "Elevating everyday {type} moments with {description}. #lifestyle #growth",
    "Dedicated to {description}. Who else is on this journey? 👇",
    "When {description} becomes part of your daily routine... #habits #growth",
];

/// Prompt lists by category tag. The first entry is the fallback.
const PROMPT_CATALOG: [(&str, &[&str]); 8] = [
    (DEFAULT_CATEGORY, LIFESTYLE_PROMPTS),
    ("fashion", FASHION_PROMPTS),
    ("food", FOOD_PROMPTS),
    ("travel", TRAVEL_PROMPTS),
    ("fitness", FITNESS_PROMPTS),
    ("tech", TECH_PROMPTS),
    ("beauty", BEAUTY_PROMPTS),
    ("business", BUSINESS_PROMPTS),
];

/// Candidate prompts for a category, falling back to the default category.
pub fn prompts_for_category(category: &str) -> &'static [&'static str] {
    let (_, fallback) = PROMPT_CATALOG[0];
    PROMPT_CATALOG
        .iter()
        .find(|(tag, _)| *tag == category)
        .map_or(fallback, |(_, prompts)| *prompts)
}

/// Image prompt for `category` at position `seed`.
pub fn prompt_for(category: &str, seed: usize) -> &'static str {
    let candidates = prompts_for_category(category);
    candidates[seed % candidates.len()]
}

/// Caption for `category` at position `seed`, using the first five words
/// of `description`.
pub fn caption_for(category: &str, description: &str, seed: usize) -> String {
    let template = CAPTION_TEMPLATES[seed % CAPTION_TEMPLATES.len()];
    template
        .replace("{type}", category)
        .replace("{description}", &description_excerpt(description))
}

/// First five whitespace-separated words.
pub fn description_excerpt(description: &str) -> String {
    description.split_whitespace().take(DESCRIPTION_EXCERPT_WORDS).collect::<Vec<_>>().join(" ")
}
