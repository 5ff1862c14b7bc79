//! Prompt classifier — maps raw prompt text to a `Category` using static keyword tables.
//!
//! Matching is case-insensitive substring search, not tokenized. The first rule in
//! `CATEGORY_RULES` with any matching keyword wins; there is no scoring.

use std::fmt;

/// Closed vocabulary of prompt categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NextJs,
    React,
    Vue,
    Ecommerce,
    Blog,
    Cms,
    Dashboard,
    Booking,
    Auth,
    Api,
    Database,
    Game,
    Social,
    Landing,
    Scraping,
    Testing,
    DevOps,
    Tools,
    UiUx,
    Branding,
    Image,
    Writing,
    Marketing,
    Ai,
    Development,
    /// Fallback when no keyword matches.
    General,
    /// Off-topic or personal question. Rejected at the HTTP boundary.
    Invalid,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::NextJs => "nextjs",
            Category::React => "react",
            Category::Vue => "vue",
            Category::Ecommerce => "ecommerce",
            Category::Blog => "blog",
            Category::Cms => "cms",
            Category::Dashboard => "dashboard",
            Category::Booking => "booking",
            Category::Auth => "auth",
            Category::Api => "api",
            Category::Database => "database",
            Category::Game => "game",
            Category::Social => "social",
            Category::Landing => "landing",
            Category::Scraping => "scraping",
            Category::Testing => "testing",
            Category::DevOps => "devops",
            Category::Tools => "tools",
            Category::UiUx => "uiux",
            Category::Branding => "branding",
            Category::Image => "image",
            Category::Writing => "writing",
            Category::Marketing => "marketing",
            Category::Ai => "ai",
            Category::Development => "development",
            Category::General => "general",
            Category::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the keyword table.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Phrases that mark a prompt as a personal/identity question rather than a task.
/// Only phrases that cannot appear inside an ordinary task request belong here,
/// since a match is a hard 400. All entries are lowercase.
pub const OFF_TOPIC_PHRASES: &[&str] = &[
    "who are you",
    "what is your name",
    "what's your name",
    "who made you",
    "who created you",
    "who built you",
    "are you human",
    "are you a bot",
    "tell me about yourself",
];

/// Ordered keyword table. Earlier rows win when several match.
/// Specific stacks and project types come before the content categories, and
/// `Development` is the last catch-all for software prompts. Keywords of the rows
/// ahead of `Development` are multi-word or long enough not to hit common
/// identifiers ("javascript", "smart", "uploads").
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::NextJs,
        keywords: &["nextjs", "next.js", "next js", "app router"],
    },
    CategoryRule {
        category: Category::React,
        keywords: &["react", "jsx", "redux"],
    },
    CategoryRule {
        category: Category::Vue,
        keywords: &["vue", "nuxt", "pinia"],
    },
    CategoryRule {
        category: Category::Ecommerce,
        keywords: &[
            "ecommerce",
            "e-commerce",
            "online store",
            "shopping cart",
            "checkout",
            "storefront",
            "shopify",
        ],
    },
    CategoryRule {
        category: Category::Blog,
        keywords: &["blog"],
    },
    CategoryRule {
        category: Category::Cms,
        keywords: &["cms", "content management", "headless", "wordpress", "strapi"],
    },
    CategoryRule {
        category: Category::Dashboard,
        keywords: &["dashboard", "admin panel", "analytics", "kpi", "reporting"],
    },
    CategoryRule {
        category: Category::Booking,
        keywords: &["booking", "reservation", "appointment", "scheduling", "calendar"],
    },
    CategoryRule {
        category: Category::Auth,
        keywords: &[
            "authentication",
            "authorization",
            "login",
            "sign up",
            "signup",
            "oauth",
            "jwt",
            "password reset",
        ],
    },
    CategoryRule {
        category: Category::Api,
        keywords: &["api", "endpoint", "rest service", "graphql", "webhook", "microservice"],
    },
    CategoryRule {
        category: Category::Database,
        keywords: &[
            "database", "sql", "postgres", "mysql", "mongodb", "schema", "migration",
        ],
    },
    CategoryRule {
        category: Category::Game,
        keywords: &["game", "gaming", "multiplayer", "unity", "godot"],
    },
    CategoryRule {
        category: Category::Social,
        keywords: &[
            "social network",
            "social platform",
            "forum",
            "community platform",
            "chat app",
            "messaging app",
            "followers",
        ],
    },
    CategoryRule {
        category: Category::Landing,
        keywords: &["landing page", "portfolio", "homepage", "waitlist"],
    },
    CategoryRule {
        category: Category::Scraping,
        keywords: &["scrape", "scraping", "scraper", "crawler", "crawl"],
    },
    CategoryRule {
        category: Category::Testing,
        keywords: &["unit test", "integration test", "e2e", "test suite", "testing", "cypress", "playwright"],
    },
    CategoryRule {
        category: Category::DevOps,
        keywords: &[
            "devops",
            "docker",
            "kubernetes",
            "ci/cd",
            "deploy",
            "terraform",
            "github actions",
        ],
    },
    CategoryRule {
        category: Category::Tools,
        keywords: &[
            "cli tool",
            "command line",
            "browser extension",
            "chrome extension",
            "plugin",
            "utility",
            "automation",
        ],
    },
    CategoryRule {
        category: Category::UiUx,
        keywords: &["ui design", "ux", "user interface", "wireframe", "figma", "mockup"],
    },
    CategoryRule {
        category: Category::Branding,
        keywords: &["brand", "logo", "visual identity", "tagline"],
    },
    CategoryRule {
        category: Category::Image,
        keywords: &[
            "draw a",
            "draw me",
            "drawing",
            "generate image",
            "image of",
            "artwork",
            "digital art",
            "concept art",
            "pixel art",
            "illustration",
            "photo of",
            "photograph",
            "picture of",
            "painting",
        ],
    },
    CategoryRule {
        category: Category::Writing,
        keywords: &[
            "article",
            "essay",
            "short story",
            "story about",
            "bedtime story",
            "poem",
            "screenplay",
            "fiction",
            "cover letter",
            "lyrics",
        ],
    },
    CategoryRule {
        category: Category::Marketing,
        keywords: &[
            "marketing",
            "advert",
            "ad campaign",
            "ad copy",
            "campaign",
            "social media",
            "promotion",
            "seo",
        ],
    },
    CategoryRule {
        category: Category::Ai,
        keywords: &[
            "chatbot",
            "ai model",
            "ai agent",
            "ai assistant",
            "artificial intelligence",
            "prompt engineering",
            "system prompt",
            "gpt",
            "machine learning",
            "llm",
        ],
    },
    CategoryRule {
        category: Category::Development,
        keywords: &[
            "app",
            "website",
            "code",
            "develop",
            "backend",
            "frontend",
            "software",
            "program",
            "function",
            "javascript",
            "typescript",
            "python",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Signal flags
// ────────────────────────────────────────────────────────────────────────────

/// Tech stack mentions for software categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackSignals {
    pub nextjs: bool,
    pub react: bool,
    pub vue: bool,
    pub shadcn: bool,
    pub tailwind: bool,
}

/// Visual style mentions for image prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisualSignals {
    pub realistic: bool,
    pub artistic: bool,
    pub cartoon: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WritingSignals {
    pub formal: bool,
    pub creative: bool,
    pub technical: bool,
}

/// Channels mentioned in marketing prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformSignals {
    pub social: bool,
    pub email: bool,
    pub ads: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AiSignals {
    pub prompting: bool,
    pub model: bool,
    pub interaction: bool,
}

/// Category-scoped sub-signals. Flags are independent and never change the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signals {
    Stack(StackSignals),
    Visual(VisualSignals),
    Writing(WritingSignals),
    Platform(PlatformSignals),
    Ai(AiSignals),
}

/// Output of `classify`: the chosen category plus its signals, if it defines any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub signals: Option<Signals>,
}

impl Classification {
    pub fn is_invalid(&self) -> bool {
        self.category == Category::Invalid
    }
}

/// Classifies a prompt. Pure and deterministic; the input is never modified.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    if contains_any(&lower, OFF_TOPIC_PHRASES) {
        return Classification {
            category: Category::Invalid,
            signals: None,
        };
    }

    let category = CATEGORY_RULES
        .iter()
        .find(|rule| contains_any(&lower, rule.keywords))
        .map(|rule| rule.category)
        .unwrap_or(Category::General);

    Classification {
        category,
        signals: detect_signals(category, &lower),
    }
}

/// Computes the signal flags for categories that define them. `lower` must be lowercased.
fn detect_signals(category: Category, lower: &str) -> Option<Signals> {
    match category {
        Category::Development | Category::NextJs | Category::React | Category::Vue => {
            Some(Signals::Stack(StackSignals {
                nextjs: contains_any(lower, &["nextjs", "next.js"]),
                react: contains_any(lower, &["react"]),
                vue: contains_any(lower, &["vue"]),
                shadcn: contains_any(lower, &["shadcn"]),
                tailwind: contains_any(lower, &["tailwind"]),
            }))
        }
        Category::Image => Some(Signals::Visual(VisualSignals {
            realistic: contains_any(lower, &["realistic", "photorealistic"]),
            artistic: contains_any(lower, &["artistic", "stylized"]),
            cartoon: contains_any(lower, &["cartoon", "anime"]),
        })),
        Category::Writing => Some(Signals::Writing(WritingSignals {
            formal: contains_any(lower, &["formal", "professional"]),
            creative: contains_any(lower, &["creative", "story"]),
            technical: contains_any(lower, &["technical", "documentation"]),
        })),
        Category::Marketing => Some(Signals::Platform(PlatformSignals {
            social: contains_any(lower, &["social", "instagram", "twitter", "tiktok", "linkedin"]),
            email: contains_any(lower, &["email", "newsletter"]),
            ads: contains_any(lower, &["ads", "advert"]),
        })),
        Category::Ai => Some(Signals::Ai(AiSignals {
            prompting: contains_any(lower, &["prompt", "instruction"]),
            model: contains_any(lower, &["model", "train"]),
            interaction: contains_any(lower, &["chat", "conversation"]),
        })),
        _ => None,
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
