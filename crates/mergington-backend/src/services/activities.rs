use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, Catalog};
use mergington::email::Email;
use mergington::errors::ActivityError;

/// A trait for reading the activity catalog and managing its participants.
///
/// Implementations own the catalog; handlers only ever reach it through this
/// interface, which keeps the HTTP layer testable against any backing store.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let catalog = service.list().await?;
///     println!("{} activities on offer", catalog.len());
///
///     service.signup("Chess Club", "new@mergington.edu").await?;
///     service.unregister("Chess Club", "new@mergington.edu").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity keyed by name.
    async fn list(&self) -> Result<Catalog, Self::Error>;

    /// Signs a student up for an activity.
    ///
    /// Checks run in a fixed order: the activity must exist, the email must
    /// be well formed, the student must not already be registered and the
    /// activity must have a free spot. Returns the accepted email.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the checks above fails.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<Email, Self::Error>;

    /// Removes a student from an activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the student is not
    /// registered for it.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`. Each write holds the entry's guard for its
/// whole check-then-mutate sequence, so concurrent sign-ups for the last spot
/// of an activity are serialized and at most one of them succeeds.
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    /// Creates a service holding the school's standard activity catalog.
    pub fn new() -> Self {
        Self::with_activities(seed_activities())
    }

    /// Creates a service holding exactly the given activities.
    pub fn with_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            activities: activities.into_iter().collect(),
        }
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = ActivityError;

    async fn list(&self) -> Result<Catalog, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<Email, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::NotFound(activity_name.to_string()))?;

        let email = Email::parse(email)?;

        if activity.is_registered(&email) {
            return Err(ActivityError::AlreadySignedUp);
        }

        if activity.is_full() {
            return Err(ActivityError::ActivityFull);
        }

        activity.add_participant(email.clone());
        Ok(email)
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::NotFound(activity_name.to_string()))?;

        if activity.remove_participant(email) {
            Ok(())
        } else {
            Err(ActivityError::NotRegistered)
        }
    }
}

fn students(local_parts: &[&str]) -> Vec<Email> {
    local_parts
        .iter()
        .filter_map(|local| Email::parse(format!("{local}@mergington.edu")).ok())
        .collect()
}

/// The activities offered at Mergington High School when the server starts.
pub fn seed_activities() -> Vec<(String, Activity)> {
    [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael", "daniel"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma", "sophia"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john", "olivia"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            ["liam", "noah"],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            ["ava", "mia"],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["amelia", "harper"],
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            ["ella", "scarlett"],
        ),
        (
            "Math Olympiad",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            ["james", "benjamin"],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            ["charlotte", "henry"],
        ),
    ]
    .into_iter()
    .map(|(name, description, schedule, max, participants)| {
        let activity =
            Activity::new(description, schedule, max).with_participants(students(&participants));
        (name.to_string(), activity)
    })
    .collect()
}
