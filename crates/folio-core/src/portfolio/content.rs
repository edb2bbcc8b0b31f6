//! Built-in portfolio used when no content file is configured.

use super::models::{
    About, ChannelKind, Contact, ContactChannel, Feature, Profile, Project, ProjectKind, Skill,
};
use super::Portfolio;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    title: &str,
    description: &str,
    technologies: &[&str],
    demo: &str,
    kind: ProjectKind,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        demo: demo.to_string(),
        kind,
    }
}

fn channel(kind: ChannelKind, label: &str, value: &str, href: Option<&str>) -> ContactChannel {
    ContactChannel {
        kind,
        label: label.to_string(),
        value: value.to_string(),
        href: href.map(str::to_string),
    }
}

pub(super) fn builtin() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Your Name".to_string(),
            greeting: "Hello, I'm".to_string(),
            roles: strings(&["Web Developer", "Graphic Designer", "Web3 Developer", "Video Editor"]),
            tagline: "I craft beautiful, functional, and user-centered digital experiences that make a difference.".to_string(),
            links: vec![
                channel(ChannelKind::Link, "GitHub", "github.com", Some("https://github.com")),
                channel(ChannelKind::Link, "LinkedIn", "linkedin.com", Some("https://www.linkedin.com")),
            ],
        },
        about: About {
            heading: "About Me".to_string(),
            summary: "A passionate full-stack developer building modern web applications, turning complex problems into simple, beautiful solutions.".to_string(),
            paragraphs: strings(&[
                "My journey in web development started with a curiosity about how things work on the internet. Over the years I've honed my skills in modern frameworks and technologies.",
                "When I'm not coding, I explore new technologies, contribute to open-source projects, and share knowledge with the developer community.",
            ]),
            features: vec![
                Feature {
                    title: "Clean Code".to_string(),
                    description: "Writing maintainable, scalable, and well-documented code that follows best practices.".to_string(),
                },
                Feature {
                    title: "Creative Design".to_string(),
                    description: "Combining aesthetics with functionality to create engaging user experiences.".to_string(),
                },
                Feature {
                    title: "Performance".to_string(),
                    description: "Optimizing applications for speed, accessibility, and seamless user interactions.".to_string(),
                },
            ],
        },
        skills: [
            "HTML5", "CSS3", "Bootstrap", "Next.js", "React", "JavaScript", "TypeScript",
            "MongoDB", "Node.js", "Python", "Git", "Photoshop", "Premiere Pro", "Figma",
            "Adobe Illustrator", "Tailwind CSS",
        ]
        .iter()
        .map(|name| Skill { name: name.to_string(), color: None })
        .collect(),
        projects: vec![
            project(
                "Currency Converter",
                "A Philippine Peso currency converter with real-time exchange rates, multiple currency support, and accurate conversion calculations.",
                &["React", "JavaScript", "CSS3", "API Integration"],
                "https://currency-conversion-xi.vercel.app/",
                ProjectKind::Frontend,
            ),
            project(
                "TechFlow Landing Page",
                "A landing page for a digital solutions company with responsive design, smooth animations, pricing tables, testimonials, and contact forms.",
                &["HTML5", "CSS3", "JavaScript", "Responsive Design"],
                "https://landingpage-practice.vercel.app/",
                ProjectKind::Frontend,
            ),
            project(
                "Flower Shop E-Commerce",
                "An e-commerce platform for a flower shop featuring a product catalog, shopping cart, user authentication, and responsive design.",
                &["React", "Next.js", "Tailwind CSS", "TypeScript"],
                "https://flower-shop-ecommerce-red.vercel.app/",
                ProjectKind::FullStack,
            ),
            project(
                "Civic Blog Platform",
                "A blog platform focused on civic engagement with article publishing, user comments, and clean typography for comfortable reading.",
                &["React", "Next.js", "Tailwind CSS", "JavaScript"],
                "https://civic-blog.vercel.app/",
                ProjectKind::Frontend,
            ),
            project(
                "Todo List Application",
                "A todo list with task management, priority levels, due dates, and local storage persistence.",
                &["React", "JavaScript", "CSS3", "Local Storage"],
                "https://todo-list-mu-nine-39.vercel.app/",
                ProjectKind::Frontend,
            ),
        ],
        contact: Contact {
            heading: "Let's Work Together".to_string(),
            intro: "Have a project in mind? I'd love to hear about it. Send me a message and let's create something amazing.".to_string(),
            channels: vec![
                channel(ChannelKind::Email, "Email", "hello@example.com", Some("mailto:hello@example.com")),
                channel(ChannelKind::Phone, "Phone", "+00 000 000 0000", Some("tel:+000000000000")),
                channel(ChannelKind::Location, "Location", "Somewhere on Earth", None),
            ],
        },
    }
}
