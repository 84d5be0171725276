//! Seed content and canonical setting overrides.
//!
//! # Responsibility
//! - Provide the document used when nothing valid has been persisted.
//! - Hold the three settings values forced onto every loaded document.
//!
//! # Invariants
//! - `apply_canonical_overrides` touches only `heroHeadline`, `email` and
//!   `phone`, and always overwrites them.

use crate::model::document::PortfolioDocument;
use crate::model::project::{Project, ProjectCategory};
use crate::model::settings::{Settings, Socials};
use crate::model::testimonial::Testimonial;

pub const CANONICAL_HERO_HEADLINE: &str = "Hi i'm Dagim Abyot Full stack developer";
pub const CANONICAL_EMAIL: &str = "dagim045@gmail.com";
pub const CANONICAL_PHONE: &str = "+251 977078336";

/// Forces the canonical headline, email and phone onto `settings`.
pub fn apply_canonical_overrides(settings: &mut Settings) {
    settings.hero_headline = CANONICAL_HERO_HEADLINE.to_string();
    settings.email = CANONICAL_EMAIL.to_string();
    settings.phone = Some(CANONICAL_PHONE.to_string());
}

/// Builds the default document shown on first run or after a corrupt load.
pub fn seed_document() -> PortfolioDocument {
    PortfolioDocument {
        projects: seed_projects(),
        testimonials: seed_testimonials(),
        leads: Vec::new(),
        settings: seed_settings(),
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Global E-Commerce Platform".to_string(),
            description: "A high-performance e-commerce solution with real-time inventory management, global payment integration, and an advanced admin dashboard.".to_string(),
            category: ProjectCategory::Web,
            image_url: "https://picsum.photos/seed/ecommerce/800/600".to_string(),
            skills: strings(&["React", "Node.js", "PostgreSQL", "Stripe", "Tailwind CSS"]),
            link: None,
            github: Some("https://github.com/dagimabyot/ecommerce-platform".to_string()),
            featured: true,
        },
        Project {
            id: "2".to_string(),
            title: "AI-Powered Content Engine".to_string(),
            description: "An intelligent platform that leverages Large Language Models to generate, optimize, and schedule social media content for brands.".to_string(),
            category: ProjectCategory::Ai,
            image_url: "https://picsum.photos/seed/ai-content/800/600".to_string(),
            skills: strings(&["Python", "Gemini API", "FastAPI", "Next.js", "Redis"]),
            link: Some("https://ai-content-demo.example.com".to_string()),
            github: Some("https://github.com/dagimabyot/ai-content-engine".to_string()),
            featured: true,
        },
        Project {
            id: "3".to_string(),
            title: "Real-time Collaboration Tool".to_string(),
            description: "A workspace for teams to collaborate on documents and projects in real-time, featuring live cursors and instant notifications.".to_string(),
            category: ProjectCategory::Web,
            image_url: "https://picsum.photos/seed/collab/800/600".to_string(),
            skills: strings(&["TypeScript", "Socket.io", "Express", "React", "MongoDB"]),
            link: None,
            github: Some("https://github.com/dagimabyot/collab-tool".to_string()),
            featured: true,
        },
        Project {
            id: "4".to_string(),
            title: "Fitness Tracking Mobile App".to_string(),
            description: "A comprehensive mobile application for tracking workouts, nutrition, and health metrics with personalized insights.".to_string(),
            category: ProjectCategory::Mobile,
            image_url: "https://picsum.photos/seed/fitness/800/600".to_string(),
            skills: strings(&["React Native", "Firebase", "Redux", "Expo"]),
            link: Some("https://fitness-app.example.com".to_string()),
            github: None,
            featured: false,
        },
    ]
}

fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            name: "Sarah Jenkins".to_string(),
            role: "Product Manager".to_string(),
            company: "TechCorp".to_string(),
            content: "Dagim is an absolute professional. The project was delivered ahead of schedule and exceeded our technical expectations. His attention to detail in the UI is unmatched.".to_string(),
            avatar: "https://picsum.photos/seed/sarah/100/100".to_string(),
        },
        Testimonial {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            role: "CTO".to_string(),
            company: "InnovateSoft".to_string(),
            content: "Working with Dagim was a breeze. He has a deep understanding of full-stack architecture and was able to solve complex backend challenges while keeping the frontend performant.".to_string(),
            avatar: "https://picsum.photos/seed/michael/100/100".to_string(),
        },
    ]
}

fn seed_settings() -> Settings {
    Settings {
        name: "Dagim Abyot".to_string(),
        brand_name: "Dagim.dev".to_string(),
        bio: "I am a results-driven Full Stack Developer with 2+ years of experience building scalable web applications. I specialize in React, Node.js, and Python, with a passion for clean code and exceptional user experiences. I bridge the gap between complex backend logic and intuitive frontend design.".to_string(),
        hero_headline: CANONICAL_HERO_HEADLINE.to_string(),
        hero_subline: "I engineer high-performance digital solutions that combine technical precision with creative design.".to_string(),
        email: CANONICAL_EMAIL.to_string(),
        phone: Some(CANONICAL_PHONE.to_string()),
        socials: Socials {
            github: Some("https://github.com/dagimabyot/".to_string()),
            linkedin: Some("https://www.linkedin.com/in/dagim-abyot/".to_string()),
            twitter: Some("https://twitter.com/dagim_dev".to_string()),
        },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
