//! Fixed content tables shown by the dashboard.

/// Achievement every learner starts with.
pub const SEED_ACHIEVEMENT: &str = "Coding Explorer";

/// Badge every learner starts with.
pub const SEED_BADGE: &str = "Newcomer";

/// Motivational quotes, drawn uniformly.
pub const QUOTES: [&str; 10] = [
    "The only way to learn a new programming language is by writing programs in it. - Dennis Ritchie",
    "Code is like humor. When you have to explain it, it's bad. - Cory House",
    "Programming isn't about what you know; it's about what you can figure out. - Chris Pine",
    "The best error message is the one that never shows up. - Thomas Fuchs",
    "First, solve the problem. Then, write the code. - John Johnson",
    "Experience is the name everyone gives to their mistakes. - Oscar Wilde",
    "Programming is the art of telling another human what one wants the computer to do. - Donald Knuth",
    "The best way to predict the future is to create it. - Peter Drucker",
    "Every great developer you know got there by solving problems they were unqualified to solve until they actually did it. - Patrick McKenzie",
    "The function of good software is to make the complex appear to be simple. - Grady Booch",
];

/// Daily challenges, drawn uniformly.
pub const CHALLENGES: [&str; 10] = [
    "Build a responsive website",
    "Create an API",
    "Develop a mobile app feature",
    "Implement authentication system",
    "Design a database schema",
    "Create a game level",
    "Build a machine learning model",
    "Implement a blockchain smart contract",
    "Create a CI/CD pipeline",
    "Design a microservice architecture",
];

/// Languages offered in the profile picker. Other values are still accepted.
pub const LANGUAGE_OPTIONS: [&str; 8] = [
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "Ruby",
    "Go",
    "Swift",
    "Kotlin",
];

/// Returns true if `language` is one of the picker options.
#[must_use]
pub fn is_known_language(language: &str) -> bool {
    LANGUAGE_OPTIONS.contains(&language)
}
