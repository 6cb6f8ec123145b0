//! Random user generation
//!
//! Produces user records that satisfy every sign-up validation rule, so tests
//! can start from a valid baseline and corrupt a single field.

use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::domain::user::{Role, UserRecord};

const USERNAME_WORDS: &[&str] = &[
    "falcon", "harbor", "maple", "cobalt", "meadow", "ember", "quartz", "willow", "summit",
    "orbit", "lantern", "tundra",
];

const EMAIL_DOMAINS: &[&str] = &["example", "mailbox", "inbox", "testmail", "postbox"];

const EMAIL_TLDS: &[&str] = &["com", "org", "net", "io"];

const MIN_GENERATED_PASSWORD_LENGTH: usize = 12;
const MAX_GENERATED_PASSWORD_LENGTH: usize = 16;

/// Generator for random, valid user records
#[derive(Debug, Clone, Default)]
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new user record
    ///
    /// The username embeds 12 hex digits of a v4 UUID, which keeps
    /// independent runs from colliding on the endpoint's uniqueness check.
    pub fn generate(&self) -> UserRecord {
        let mut rng = rand::thread_rng();

        let word = USERNAME_WORDS.choose(&mut rng).copied().unwrap_or("user");
        let entropy = Uuid::new_v4().simple().to_string();

        let username = format!("{}_{}", word, &entropy[..12]);
        let email = format!(
            "{}.{}@{}.{}",
            word,
            &entropy[12..20],
            EMAIL_DOMAINS.choose(&mut rng).copied().unwrap_or("example"),
            EMAIL_TLDS.choose(&mut rng).copied().unwrap_or("com"),
        );

        let password_length =
            rng.gen_range(MIN_GENERATED_PASSWORD_LENGTH..=MAX_GENERATED_PASSWORD_LENGTH);
        let password = random_alphanumeric(password_length);

        let role_count = rng.gen_range(1..=Role::ALL.len());
        let roles: Vec<Role> = Role::ALL
            .choose_multiple(&mut rng, role_count)
            .copied()
            .collect();

        let user = UserRecord::new(username, password, email, roles);

        debug_assert!(
            user.is_valid(),
            "generated user violates validation rules: {:?}",
            user.validate()
        );

        user
    }
}

/// Generate a random, valid user record
pub fn get_random_user() -> UserRecord {
    UserGenerator::new().generate()
}

/// Random ASCII letters and digits of the given length
pub fn random_alphanumeric(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
