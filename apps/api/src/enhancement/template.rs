//! Enhancement template builder — turns a classification and the user's prompt into
//! the instruction string sent to the generator.

use crate::enhancement::classifier::{Category, Classification, Signals};

/// A category's focus checklist: a heading and its bullet points.
#[derive(Debug, Clone, Copy)]
pub struct Checklist {
    pub heading: &'static str,
    pub points: &'static [&'static str],
}

/// Closing rules appended to every template.
pub const ENHANCEMENT_RULES: &[&str] = &[
    "Maintain original intent while adding detail",
    "Be specific but flexible",
    "Focus on desired outcomes",
    "Add relevant context",
    "Keep natural language flow",
    "Don't include explanations or metadata",
];

pub const CLOSING_INSTRUCTION: &str = "Generate an enhanced prompt that provides clear, \
    detailed instructions while maintaining a natural style.";

const GENERAL_CHECKLIST: Checklist = Checklist {
    heading: "General Enhancement",
    points: &[
        "Key details and specifications",
        "Context and requirements",
        "Quality criteria",
        "Desired outcome",
        "Important parameters",
    ],
};

/// Returns the static checklist for a category.
pub fn checklist_for(category: Category) -> Checklist {
    match category {
        Category::NextJs => Checklist {
            heading: "Next.js Focus",
            points: &[
                "Routing structure and page layout",
                "Server vs client components",
                "Data fetching and caching strategy",
                "SEO and metadata",
                "Deployment target",
            ],
        },
        Category::React => Checklist {
            heading: "React Focus",
            points: &[
                "Component hierarchy and reuse",
                "State management approach",
                "Data fetching and side effects",
                "Styling approach",
                "Accessibility and responsiveness",
            ],
        },
        Category::Vue => Checklist {
            heading: "Vue Focus",
            points: &[
                "Component structure and composition API usage",
                "State management",
                "Routing and navigation",
                "Styling approach",
                "Build tooling",
            ],
        },
        Category::Ecommerce => Checklist {
            heading: "E-commerce Focus",
            points: &[
                "Product catalog and search",
                "Cart and checkout flow",
                "Payment provider integration",
                "Order management and notifications",
                "Inventory handling",
                "Trust and security signals",
            ],
        },
        Category::Blog => Checklist {
            heading: "Blog Focus",
            points: &[
                "Content authoring and formatting",
                "Post listing, tags and categories",
                "Reading experience and typography",
                "SEO and sharing metadata",
                "Comments or engagement features",
            ],
        },
        Category::Cms => Checklist {
            heading: "CMS Focus",
            points: &[
                "Content types and fields",
                "Editorial workflow and roles",
                "Media management",
                "Delivery API or rendering approach",
                "Preview and publishing",
            ],
        },
        Category::Dashboard => Checklist {
            heading: "Dashboard Focus",
            points: &[
                "Key metrics and KPIs to display",
                "Data sources and refresh cadence",
                "Chart and widget types",
                "Filtering and drill-down",
                "User roles and permissions",
            ],
        },
        Category::Booking => Checklist {
            heading: "Booking Focus",
            points: &[
                "Availability and calendar management",
                "Booking flow and confirmation",
                "Cancellations and rescheduling",
                "Reminders and notifications",
                "Payments or deposits",
            ],
        },
        Category::Auth => Checklist {
            heading: "Authentication Focus",
            points: &[
                "Sign-up and login methods",
                "Session or token handling",
                "Password reset and account recovery",
                "Roles and access control",
                "Security requirements",
            ],
        },
        Category::Api => Checklist {
            heading: "API Focus",
            points: &[
                "Resources and endpoints",
                "Request and response formats",
                "Authentication and authorization",
                "Error handling and status codes",
                "Versioning and documentation",
            ],
        },
        Category::Database => Checklist {
            heading: "Database Focus",
            points: &[
                "Entities and relationships",
                "Schema and constraints",
                "Indexing and query patterns",
                "Migrations",
                "Backup and data integrity",
            ],
        },
        Category::Game => Checklist {
            heading: "Game Focus",
            points: &[
                "Core gameplay loop",
                "Controls and player feedback",
                "Art style and audio",
                "Progression and difficulty",
                "Target platform",
            ],
        },
        Category::Social => Checklist {
            heading: "Social Platform Focus",
            points: &[
                "User profiles and connections",
                "Feed and content posting",
                "Messaging and notifications",
                "Moderation and safety",
                "Privacy controls",
            ],
        },
        Category::Landing => Checklist {
            heading: "Landing Page Focus",
            points: &[
                "Hero section and headline",
                "Value proposition and benefits",
                "Social proof",
                "Call to action",
                "Visual style and responsiveness",
            ],
        },
        Category::Scraping => Checklist {
            heading: "Scraping Focus",
            points: &[
                "Target sites and data fields",
                "Pagination and navigation",
                "Rate limiting and politeness",
                "Output format and storage",
                "Error handling and retries",
            ],
        },
        Category::Testing => Checklist {
            heading: "Testing Focus",
            points: &[
                "Scope: unit, integration or end-to-end",
                "Critical paths and edge cases",
                "Test data and fixtures",
                "Tooling and frameworks",
                "CI integration and coverage goals",
            ],
        },
        Category::DevOps => Checklist {
            heading: "DevOps Focus",
            points: &[
                "Build and deployment pipeline",
                "Infrastructure and environments",
                "Configuration and secrets",
                "Monitoring and logging",
                "Scaling and rollback strategy",
            ],
        },
        Category::Tools => Checklist {
            heading: "Tooling Focus",
            points: &[
                "Inputs, outputs and options",
                "Target environment and installation",
                "Core commands or actions",
                "Error messages and feedback",
                "Configuration",
            ],
        },
        Category::UiUx => Checklist {
            heading: "UI/UX Focus",
            points: &[
                "User goals and key flows",
                "Layout and visual hierarchy",
                "Interaction patterns and states",
                "Accessibility",
                "Design system and consistency",
            ],
        },
        Category::Branding => Checklist {
            heading: "Branding Focus",
            points: &[
                "Brand personality and values",
                "Target audience",
                "Color palette and typography",
                "Logo style and usage",
                "Tone of voice",
            ],
        },
        Category::Image => Checklist {
            heading: "Visual Focus",
            points: &[
                "Subject and composition",
                "Style and mood",
                "Color palette and lighting",
                "Technical specifications",
                "Environmental details",
                "Specific visual elements",
            ],
        },
        Category::Writing => Checklist {
            heading: "Writing Focus",
            points: &[
                "Tone and style",
                "Structure and flow",
                "Key points and message",
                "Target audience",
                "Supporting details",
                "Format specifications",
            ],
        },
        Category::Marketing => Checklist {
            heading: "Marketing Focus",
            points: &[
                "Target audience",
                "Key message and value proposition",
                "Call to action",
                "Platform-specific requirements",
                "Brand voice and tone",
                "Campaign context",
            ],
        },
        Category::Ai => Checklist {
            heading: "AI Focus",
            points: &[
                "Clear instructions and constraints",
                "Desired output format",
                "Important parameters",
                "Context and requirements",
                "Edge cases to handle",
                "Quality criteria",
            ],
        },
        Category::Development => Checklist {
            heading: "Development Focus",
            points: &[
                "Architecture and structure",
                "User interface and experience",
                "Core features and functionality",
                "Technical requirements",
            ],
        },
        Category::General | Category::Invalid => GENERAL_CHECKLIST,
    }
}

/// Extra checklist lines for the true flags, in field declaration order.
fn signal_lines(signals: &Signals) -> Vec<&'static str> {
    let candidates: Vec<(bool, &'static str)> = match signals {
        Signals::Stack(s) => vec![
            (s.nextjs, "Next.js routing, plus server vs client components"),
            (s.react, "React component composition and hooks"),
            (s.vue, "Vue single-file components and reactivity"),
            (s.shadcn, "shadcn/ui component selection, theme and styling patterns"),
            (s.tailwind, "Tailwind utility classes and design tokens"),
        ],
        Signals::Visual(s) => vec![
            (s.realistic, "Photorealistic detail, lens and lighting choices"),
            (s.artistic, "Artistic medium and stylization"),
            (s.cartoon, "Cartoon or anime character design and line work"),
        ],
        Signals::Writing(s) => vec![
            (s.formal, "Formal, professional register"),
            (s.creative, "Narrative voice, imagery and pacing"),
            (s.technical, "Technical accuracy and clear documentation structure"),
        ],
        Signals::Platform(s) => vec![
            (s.social, "Social platform formats and hashtags"),
            (s.email, "Email subject line and newsletter layout"),
            (s.ads, "Ad copy length limits and targeting"),
        ],
        Signals::Ai(s) => vec![
            (s.prompting, "Prompt structure and explicit instructions"),
            (s.model, "Model choice and training data considerations"),
            (s.interaction, "Conversation flow and turn handling"),
        ],
    };

    candidates
        .into_iter()
        .filter_map(|(on, line)| on.then_some(line))
        .collect()
}

/// Builds the full enhancement template. Pure: identical inputs give identical output.
pub fn build_template(classification: &Classification, prompt: &str) -> String {
    let checklist = checklist_for(classification.category);

    let mut out = format!(
        "Enhance this {} prompt to be more detailed and effective:\n\"{}\"\n\n{}:\n",
        classification.category, prompt, checklist.heading
    );

    let extra = classification
        .signals
        .as_ref()
        .map(signal_lines)
        .unwrap_or_default();

    for point in checklist.points.iter().chain(extra.iter()) {
        out.push_str("- ");
        out.push_str(point);
        out.push('\n');
    }

    out.push_str("\nEnhancement Rules:\n");
    for rule in ENHANCEMENT_RULES {
        out.push_str("- ");
        out.push_str(rule);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(CLOSING_INSTRUCTION);
    out
}
