//! Static default content rendered while a table is still empty.

use crate::hero::BackgroundType;
use crate::site::{FaqItem, HeroView, ProcessStep, ProjectCard, StatItem, TestimonialCard};

const HERO_VIDEO_URL: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-desert-road-from-above-2943-large.mp4";
const HERO_POSTER_URL: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920&q=80";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

pub fn hero_services() -> Vec<String> {
    strings(&[
        "Branding and identity",
        "Social media strategy",
        "Events & marketing",
        "Photography & videography",
    ])
}

pub fn hero() -> HeroView {
    HeroView {
        background_type: BackgroundType::Video.as_str().to_string(),
        video_url: Some(HERO_VIDEO_URL.to_string()),
        image_url: None,
        poster_url: Some(HERO_POSTER_URL.to_string()),
        tagline: Some("International marketing".to_string()),
        title: Some("Luther".to_string()),
        button_text: Some("Start your project".to_string()),
        services: hero_services(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

fn project(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    image: &str,
    category: &str,
) -> ProjectCard {
    ProjectCard {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        image: image.to_string(),
        logo: None,
        category: Some(category.to_string()),
    }
}

pub fn projects() -> Vec<ProjectCard> {
    vec![
        project(
            "avantgarde",
            "Avantgarde Estate & Co. Limited",
            "Where innovation meets strength, redefining modern construction through design and precision.",
            "October 30, 2025",
            "1:19 pm",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80",
            "Branding",
        ),
        project(
            "orion",
            "Orion Holding Limited",
            "Breaking boundaries in business solutions through strategy, creativity, and innovation.",
            "October 28, 2025",
            "11:19 am",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&q=80",
            "Marketing",
        ),
        project(
            "fairmont",
            "Fairmont PM",
            "Building a construction identity defined by integrity, precision, and timeless design.",
            "November 20, 2025",
            "12:34 pm",
            "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80",
            "Branding",
        ),
        project(
            "urbanhub",
            "Urban Hub",
            "Redefining student living through vibrant design, digital innovation, and community-first storytelling.",
            "October 28, 2025",
            "11:19 am",
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&q=80",
            "Digital",
        ),
        project(
            "unityliving",
            "Unity Living",
            "Unity Living offers safe, secure, and stylish student accommodation in prime locations in United Kingdom.",
            "October 28, 2025",
            "11:19 am",
            "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=800&q=80",
            "Strategy",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

fn testimonial(id: &str, name: &str, role: &str, avatar: &str, content: &str) -> TestimonialCard {
    TestimonialCard {
        id: id.to_string(),
        name: name.to_string(),
        role: Some(role.to_string()),
        avatar: avatar.to_string(),
        rating: 5,
        content: content.to_string(),
    }
}

pub fn testimonials() -> Vec<TestimonialCard> {
    vec![
        testimonial(
            "1",
            "Chloe Barrett",
            "CEO, TechStart",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
            "I was blown away by the creativity and precision. They turned vague ideas into a beautiful brand experience. The process was smooth, supportive, and extremely efficient from start to finish.",
        ),
        testimonial(
            "2",
            "Daniel Rhodes",
            "Founder, Innovate Labs",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop",
            "Their design skills are exceptional, and the final result speaks for itself. Fast delivery, collaborative process, and stunning visuals. I'm incredibly proud to showcase our new online identity.",
        ),
        testimonial(
            "3",
            "Samuel Reed",
            "Marketing Director",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
            "From concept to launch, they handled everything with professionalism and creativity. The branding and website exceeded expectations. Their communication was excellent, and they truly understood our vision perfectly.",
        ),
        testimonial(
            "4",
            "Maya Turner",
            "Creative Director",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
            "Working with this team was an absolute game-changer. They brought my brand to life with smart strategy, bold design, and flawless execution. I recommend them to anyone serious about growth.",
        ),
    ]
}

// ---------------------------------------------------------------------------
// FAQs
// ---------------------------------------------------------------------------

fn faq(id: &str, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn faqs() -> Vec<FaqItem> {
    vec![
        faq(
            "1",
            "What is your typical project timeline?",
            "The timeline for a project typically ranges from 4 to 8 weeks, depending on the scope and complexity. After an initial consultation, I'll provide a detailed timeline with key milestones so you know what to expect at each stage.",
        ),
        faq(
            "2",
            "Do you offer ongoing maintenance and support?",
            "Yes, we offer comprehensive maintenance and support packages to ensure your website or marketing campaigns continue to perform optimally. This includes regular updates, security patches, performance monitoring, and content updates as needed.",
        ),
        faq(
            "3",
            "Can you work with existing brand guidelines?",
            "Absolutely! We love working with established brand guidelines and can seamlessly integrate your existing visual identity into new projects. If you don't have brand guidelines yet, we can help create them as part of our branding services.",
        ),
        faq(
            "4",
            "How do you handle revisions and feedback?",
            "We believe in a collaborative approach. Each project includes multiple revision rounds to ensure you're completely satisfied. We use structured feedback sessions and clear communication channels to incorporate your input efficiently.",
        ),
        faq(
            "5",
            "How do I get started?",
            "Getting started is easy! Simply reach out through our contact form or email us directly. We'll schedule an initial consultation to discuss your goals, requirements, and vision. From there, we'll provide a detailed proposal and timeline for your project.",
        ),
    ]
}

// ---------------------------------------------------------------------------
// How we work
// ---------------------------------------------------------------------------

pub fn services_marquee() -> Vec<String> {
    strings(&[
        "Corporate websites",
        "Blogs",
        "Social media management",
        "Videography",
        "UI/UX design",
        "Web development",
        "Ecommerce",
    ])
}

fn step(phase: &str, number: &str, title: &str, points: &[&str]) -> ProcessStep {
    ProcessStep {
        phase: phase.to_string(),
        number: number.to_string(),
        title: title.to_string(),
        duration: "13 - 15 days".to_string(),
        points: strings(points),
    }
}

pub fn process_steps() -> Vec<ProcessStep> {
    vec![
        step(
            "Discovery",
            "01",
            "We dive deep into your personal goals and long-term vision",
            &[
                "Initial consultation: Understand the client's vision, goals, and target audience.",
                "Research: Analyze competitors and industry trends to gather insights.",
                "Define scope: Set the project's objectives, deliverables, and timelines.",
            ],
        ),
        step(
            "Design",
            "02",
            "We create mockups that bring your brand to life",
            &[
                "Wireframing: Create low-fidelity wireframes to map out the site's structure.",
                "Style guide creation: Develop a design language including colors, fonts, and UI elements.",
                "Prototype development: Build clickable prototypes for client feedback.",
            ],
        ),
        step(
            "Build",
            "03",
            "Using codes & tools, we bring your vision to life",
            &[
                "Page construction: Build out the website structure using selected tools.",
                "Content integration: Import and format content (text, images, videos).",
                "Basic SEO setup: Optimize on-page elements for search engines.",
            ],
        ),
        step(
            "Marketing",
            "04",
            "Your vision goes live, ready to make an impact",
            &[
                "Client review: Present the site to the client for feedback.",
                "Revisions: Make necessary changes based on client feedback.",
            ],
        ),
    ]
}

fn stat(value: &str, label: &str, unit: &str, is_highlighted: bool) -> StatItem {
    StatItem {
        value: value.to_string(),
        label: label.to_string(),
        unit: unit.to_string(),
        is_highlighted,
    }
}

pub fn stats() -> Vec<StatItem> {
    vec![
        stat("95+", "Customer satisfaction", "Percent", true),
        stat("10+", "Of experience", "Years", false),
        stat("24+", "Completed", "Projects", false),
    ]
}
