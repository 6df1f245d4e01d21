//! Built-in posts, used when a site has no posts data file

use chrono::NaiveDate;

use super::post::Post;

const AUTHOR: &str = "Santhosh Raj";

// title, slug, date, category, thumbnail
const POSTS: &[(&str, &str, (i32, u32, u32), &str, &str)] = &[
    (
        "Python 3.12: New Features and Performance Boosts",
        "python-3-12-new-features-and-performance-boosts",
        (2024, 3, 10),
        "Python",
        "/images/thumbnails/python-312.jpg",
    ),
    (
        "Building Scalable Web Apps with Django and Next.js",
        "building-scalable-web-apps-with-django-and-nextjs",
        (2024, 2, 25),
        "Django",
        "/images/thumbnails/django-nextjs.png",
    ),
    (
        "Advanced React Patterns: Elevate Your Frontend Development",
        "advanced-react-patterns-elevate-your-frontend-development",
        (2024, 4, 1),
        "React",
        "/images/thumbnails/react-advanced.jpg",
    ),
    (
        "Tailwind CSS v4: What's New and How to Upgrade",
        "tailwind-css-v4-whats-new-and-how-to-upgrade",
        (2024, 3, 20),
        "Tailwind CSS",
        "/images/thumbnails/tailwind-v4.png",
    ),
    (
        "Django Performance Optimization: Tips & Tricks",
        "django-performance-optimization-tips-and-tricks",
        (2024, 2, 28),
        "Django",
        "/images/thumbnails/django-performance.webp",
    ),
    (
        "AI-Powered Web Apps with Python and TensorFlow.js",
        "ai-powered-web-apps-with-python-and-tensorflow-js",
        (2024, 3, 30),
        "AI/ML",
        "/images/thumbnails/python-ai.webp",
    ),
    (
        "State Management in React: Redux vs. Zustand vs. Context API",
        "state-management-in-react-redux-vs-zustand-vs-context-api",
        (2024, 4, 10),
        "React",
        "/images/thumbnails/react-state-management.webp",
    ),
    (
        "Deploying Django Apps with Docker and Kubernetes",
        "deploying-django-apps-with-docker-and-kubernetes",
        (2024, 2, 15),
        "DevOps",
        "/images/thumbnails/django-docker.png",
    ),
    (
        "Python Async Programming: Mastering asyncio",
        "python-async-programming-mastering-asyncio",
        (2024, 4, 5),
        "Python",
        "/images/thumbnails/python-async.webp",
    ),
    (
        "Django vs. Flask: Which One Should You Use in 2024?",
        "django-vs-flask-which-one-should-you-use-in-2024",
        (2024, 1, 30),
        "Web Development",
        "/images/thumbnails/django_vs_flask.jpeg",
    ),
    (
        "TypeScript for Python Developers: A Beginner’s Guide",
        "typescript-for-python-developers-a-beginners-guide",
        (2024, 1, 18),
        "TypeScript",
        "/images/thumbnails/typescript-python.webp",
    ),
    (
        "Mastering Python’s Pattern Matching: The Power of `match-case`",
        "mastering-python-pattern-matching",
        (2025, 3, 13),
        "Python",
        "/images/thumbnails/python-match-case.webp",
    ),
];

/// The built-in post list, in publication-list order
pub fn posts() -> Vec<Post> {
    POSTS
        .iter()
        .map(|&(title, slug, (y, m, d), category, thumbnail)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
            Post::new(title, slug, AUTHOR, date, category, thumbnail)
        })
        .collect()
}
