//! Compiled-in default document.
//!
//! Used when no persisted document exists (first run) or when persisted
//! state fails to parse. Also the target of the admin reset action.

use super::content::{
    AboutSection, ContactSection, HeroSection, HomeSection, IntroSection, Project, QuickFacts,
    Service, SiteContent, Skills, Socials, Step,
};

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn step(title: &str, description: &str) -> Step {
    Step {
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Builds the default site document shipped with the binary.
pub fn default_content() -> SiteContent {
    SiteContent {
        home: HomeSection {
            hero: HeroSection {
                name: "Rida Khanoufi".to_string(),
                title: "UI/UX Designer & Frontend Developer".to_string(),
                subtitle: "Second-year UI Design student based in Agadir, Morocco.".to_string(),
                description: "Designing clean, modern interfaces and bringing them to life with Figma and code.".to_string(),
                image: "https://i.pinimg.com/736x/cf/a9/9f/cfa99fe9dc1fb9e1c7e81868fffeb2b1.jpg".to_string(),
                cta_primary: "View selected projects".to_string(),
                cta_secondary: "Contact me".to_string(),
            },
            highlight_strip: vec![
                "Figma Proficient".to_string(),
                "User-Centered Design".to_string(),
                "Responsive Web".to_string(),
                "Smooth Micro-Interactions".to_string(),
                "Figma Proficient".to_string(),
                "User-Centered Design".to_string(),
            ],
            intro: IntroSection {
                title: "Crafting thoughtful digital experiences".to_string(),
                description: "I design and develop interfaces that feel simple, clear, and purposeful. From first sketches and UX flows to polished UI and front-end builds, every detail is focused on helping users move smoothly through your product.".to_string(),
            },
            services: vec![
                service(
                    "UI Design",
                    "Clear layouts, strong typography, and consistent design systems for web and mobile.",
                ),
                service(
                    "UX & Product Thinking",
                    "Personas, user journeys, flows, and wireframes that keep decisions focused on real needs.",
                ),
                service(
                    "Frontend Development",
                    "Clean, responsive interfaces using HTML, CSS, and JavaScript in Visual Studio Code.",
                ),
                service(
                    "Prototyping",
                    "Interactive Figma prototypes to test ideas quickly before development.",
                ),
            ],
            currently: "Exploring clean design systems, scroll-based interactions, and turning case studies into full live websites.".to_string(),
        },
        about: AboutSection {
            header: "About Rida".to_string(),
            subheader: "UI-focused designer with a love for details and smooth experiences.".to_string(),
            bio: "I am a second-year UI design student in Agadir, Morocco, specializing in user interface design and frontend implementation. My work focuses on clean layouts, readable typography, and interactive details that make digital products feel both modern and intuitive. Between Figma, design systems, and HTML/CSS/JS in VS Code, I enjoy owning the full journey from concept to a working interface. I care about structure, spacing, and motion, so every screen feels intentional and easy to use.".to_string(),
            quick_facts: QuickFacts {
                location: "Agadir, Morocco".to_string(),
                role: "UI/UX Designer & Frontend Developer".to_string(),
                tools: "Figma, VS Code, Affinity Designer, GitHub".to_string(),
                interests: "Web design, music platforms, e-commerce, clean portfolio experiences".to_string(),
            },
            skills: Skills {
                ui: "Design systems, components, layout grids, color and type.".to_string(),
                ux: "Research basics, personas, user flows, information architecture, wireframes.".to_string(),
                frontend: "Semantic HTML, modern CSS, basic JavaScript for interactions/animations.".to_string(),
                prototyping: "Clickable flows in Figma to validate UX and showcase UI.".to_string(),
            },
            process: vec![
                step("Understand", "Clarify problem, audience, goals before drawing screens."),
                step("Structure", "Map user journeys, flows, content for logical product."),
                step(
                    "Design",
                    "Build clean, consistent UI with clear hierarchy, reusable components.",
                ),
                step(
                    "Refine",
                    "Add micro-interactions, polish states, ensure device responsiveness.",
                ),
            ],
            cta: "Open to internships, junior roles, freelance UI/UX. Let’s work together.".to_string(),
        },
        projects: vec![
            Project {
                id: "destitia".to_string(),
                title: "Destitia".to_string(),
                category: "UX/UI - Web - Collaborative - Responsive".to_string(),
                description: "Destitia is a collaborative travel platform for discovering Morocco's destinations, booking experiences, and planning trips with intuitive flows and vibrant visuals tied to local culture.".to_string(),
                image: "https://mir-s3-cdn-cf.behance.net/project_modules/1400_webp/0f4acc239218723.6924e0eb6307a.jpg".to_string(),
                case_study_url: Some("https://www.behance.net/gallery/239218723/Destina-A-Modern-Moroccan-Travel-UIUX-Case-Study".to_string()),
                role: Some("UI Design lead (visual systems, layouts, prototyping, frontend responsiveness). Collaborated with Fatima Zahra Habib (UX Researcher).".to_string()),
                problem: Some("Travel sites overwhelm with cluttered listings, poor mobile for Morocco itineraries (beach escapes, Atlas hikes).".to_string()),
                solution: Some("Clean card-based home with filters, detailed destination pages, seamless booking. Responsive: large hero images, minimal nav, one-tap mobile actions.".to_string()),
                process: Some(vec![
                    "Fatima's research: Personas (solo travelers, families), key tasks.".to_string(),
                    "My work: Wireframes to high-fid UI, design system (buttons/cards/modals).".to_string(),
                    "Responsive breakpoints for Agadir coastal vibes.".to_string(),
                ]),
                results: Some("Polished team concept ready for dev. Showcases collaboration + strong UI. Live prototype available.".to_string()),
                team: None,
            },
            Project {
                id: "smart-chef".to_string(),
                title: "Smart Chef".to_string(),
                category: "UX/UI - Mobile".to_string(),
                description: "Smart Chef makes finding recipes, managing ingredients, and step-by-step cooking easy without overwhelm.".to_string(),
                image: "https://mir-s3-cdn-cf.behance.net/project_modules/fs_webp/6aee2c228379927.6851e219d551f.png".to_string(),
                case_study_url: Some("https://www.behance.net/gallery/228379927/SmartChef-Ux-Case-Study".to_string()),
                role: None,
                problem: Some("Recipe apps visually noisy, not optimized for quick cooking checks.".to_string()),
                solution: Some("Clean interface: recipes/favorites/step-by-step mode, legible typography, simple nav.".to_string()),
                process: Some(vec![
                    "Personas for home cooks/busy users.".to_string(),
                    "Flows for search/save/follow recipes.".to_string(),
                    "Card layouts, clear steps, contrasting buttons.".to_string(),
                ]),
                results: Some("Mobile concept helps cook confidently with focused, calm visuals.".to_string()),
                team: None,
            },
            Project {
                id: "vinyl-echo".to_string(),
                title: "Vinyl Echo".to_string(),
                category: "UI/UX - E-commerce - Web".to_string(),
                description: "Vinyl Echo for vinyl lovers: premium style, smooth shopping for albums/collections.".to_string(),
                image: "https://mir-s3-cdn-cf.behance.net/project_modules/1400_webp/70097f239729321.6930ab4c746dc.jpg".to_string(),
                case_study_url: Some("https://www.behance.net/gallery/239729321/VINYL-ECHO-Music-ECommerce-Website-Design".to_string()),
                role: None,
                problem: Some("Online vinyl stores outdated/generic, hard to enjoy browsing.".to_string()),
                solution: Some("Refined interface: large covers, clear categories, modern music-inspired visuals for hip-hop/contemporary collectors.".to_string()),
                process: Some(vec![
                    "Info architecture: home/catalog/product/cart/checkout.".to_string(),
                    "Responsive layouts, retro-modern mood (warm tones, strong typography).".to_string(),
                    "Flows for discover/pre-order/buy.".to_string(),
                ]),
                results: Some("Full website turns crate-digging into polished digital experience.".to_string()),
                team: None,
            },
        ],
        contact: ContactSection {
            header: "Let’s build something clean and modern".to_string(),
            subheader: "Whether UI concept, case study, or live website, reach out.".to_string(),
            email: "ridakhanoufi0201@gmail.com".to_string(),
            phone: "0637102373".to_string(),
            location: "Agadir, Morocco".to_string(),
            formspree_id: "xgvgrzqr".to_string(),
            socials: Socials {
                behance: "www.behance.net/ridakhanoufi".to_string(),
                linkedin: "www.linkedin.com/in/rida-khanoufi-99108b338/".to_string(),
                github: "www.github.com/RidaFlame".to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::default_content;

    #[test]
    fn default_document_round_trips_through_json() {
        let document = default_content();
        let json = serde_json::to_string(&document).expect("default should serialize");
        let parsed = serde_json::from_str(&json).expect("default should parse back");
        assert_eq!(document, parsed);
    }

    #[test]
    fn default_document_has_a_configured_relay() {
        assert!(!default_content().contact.formspree_id.is_empty());
    }
}
