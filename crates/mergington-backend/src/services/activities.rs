use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, Catalog};
use mergington::errors::ActivityError;
use mergington::log;

use super::seed;

/// A trait for managing the activity catalog and its participants.
///
/// Activities are identified by their unique name. Implementations decide where
/// the catalog lives; the membership rules are the same for all of them:
/// an email is enrolled in a given activity at most once, and signup and
/// unregister are the only operations that change enrolment.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let chess = service.signup("Chess Club", "new.student@mergington.edu").await?;
///     assert!(chess.is_enrolled("new.student@mergington.edu"));
///
///     service.unregister("Chess Club", "new.student@mergington.edu").await?;
///
///     let catalog = service.list().await?;
///     println!("{} activities", catalog.len());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity keyed by name.
    async fn list(&self) -> Result<Catalog, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has the given name.
    async fn get(&self, activity: &str) -> Result<Activity, Self::Error>;

    /// Enrols `email` in `activity`, appending it to the participant list.
    ///
    /// Capacity is not checked. Returns the activity as it is after the signup.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, or if the email is
    /// already enrolled in it. The existence check happens first.
    async fn signup(&self, activity: &str, email: &str) -> Result<Activity, Self::Error>;

    /// Removes `email` from `activity`.
    ///
    /// Returns the activity as it is after the removal.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, or if the email is not
    /// enrolled in it. The existence check happens first.
    async fn unregister(&self, activity: &str, email: &str) -> Result<Activity, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities are stored in a `DashMap`. Signup and unregister hold the map's
/// write guard for the targeted activity across the membership check and the
/// mutation, so concurrent requests against the same activity are serialised
/// and cannot both pass the same check.
///
/// # Examples
/// ```rust,ignore
/// let service = ActivityServiceInMemory::seeded();
/// let chess = service.signup("Chess Club", "new@mergington.edu").await.unwrap();
/// assert_eq!(chess.participants.last().unwrap(), "new@mergington.edu");
/// ```
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    /// Builds a store holding the given activities. Later duplicates of a name replace earlier ones.
    pub fn from_catalog<I, K>(catalog: I) -> Self
    where
        I: IntoIterator<Item = (K, Activity)>,
        K: Into<String>,
    {
        Self {
            activities: catalog
                .into_iter()
                .map(|(name, activity)| (name.into(), activity))
                .collect(),
        }
    }

    /// Builds a store holding the school's standard activity catalog.
    pub fn seeded() -> Self {
        Self::from_catalog(seed::catalog())
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn participant_count(&self) -> usize {
        self.activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum()
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

    async fn get(&self, activity: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ActivityError::not_found(activity))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Activity, Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::not_found(activity))?;

        if !entry.add_participant(email) {
            return Err(ActivityError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        if entry.is_over_capacity() {
            log::warn!(
                activity,
                enrolled = entry.participants.len(),
                max_participants = entry.max_participants,
                "Enrolment exceeds max_participants; capacity is not enforced"
            );
        }

        Ok(entry.value().clone())
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Activity, Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::not_found(activity))?;

        if !entry.remove_participant(email) {
            return Err(ActivityError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn seeded_catalog_lists_every_activity() {
        let service = ActivityServiceInMemory::seeded();
        let catalog = service.list().await.unwrap();

        for (name, _) in seed::catalog() {
            assert!(catalog.contains_key(name), "missing {name}");
        }
        assert_eq!(catalog.len(), service.activity_count());
    }

    #[tokio::test]
    async fn signup_appends_in_order() {
        let service = ActivityServiceInMemory::seeded();

        service
            .signup("Tennis Club", "first@mergington.edu")
            .await
            .unwrap();
        let tennis = service
            .signup("Tennis Club", "second@mergington.edu")
            .await
            .unwrap();

        assert_eq!(
            tennis.participants,
            vec![
                "sarah@mergington.edu",
                "first@mergington.edu",
                "second@mergington.edu"
            ]
        );
        assert_eq!(service.get("Tennis Club").await.unwrap(), tennis);
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_not_found() {
        let service = ActivityServiceInMemory::seeded();
        let err = service
            .signup("NoSuchClub", "a@b.com")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::not_found("NoSuchClub"));
    }

    #[tokio::test]
    async fn duplicate_signup_leaves_list_unchanged() {
        let service = ActivityServiceInMemory::seeded();
        let before = service.get("Chess Club").await.unwrap();

        let err = service
            .signup("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, ActivityError::AlreadySignedUp { .. }));
        assert_eq!(service.get("Chess Club").await.unwrap(), before);
    }

    #[tokio::test]
    async fn repeated_signup_succeeds_once() {
        let service = ActivityServiceInMemory::seeded();

        assert!(service.signup("Art Club", "rep@mergington.edu").await.is_ok());
        assert!(matches!(
            service.signup("Art Club", "rep@mergington.edu").await,
            Err(ActivityError::AlreadySignedUp { .. })
        ));
    }

    #[tokio::test]
    async fn unregister_removes_participant() {
        let service = ActivityServiceInMemory::seeded();

        let chess = service
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        assert!(!chess.is_enrolled("michael@mergington.edu"));
        assert_eq!(chess.participants, vec!["daniel@mergington.edu"]);
    }

    #[tokio::test]
    async fn unregister_without_membership_is_rejected() {
        let service = ActivityServiceInMemory::seeded();
        let err = service
            .unregister("Gym Class", "not.registered@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::NotSignedUp { .. }));
    }

    #[tokio::test]
    async fn unknown_activity_wins_over_membership_check() {
        let service = ActivityServiceInMemory::seeded();
        let err = service
            .unregister("NoClub", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::not_found("NoClub"));
    }

    #[tokio::test]
    async fn signup_past_capacity_is_allowed() {
        let service = ActivityServiceInMemory::from_catalog([(
            "Tiny Club",
            Activity::new("Small", "Never", 1).with_participants(["one@mergington.edu"]),
        )]);

        let tiny = service
            .signup("Tiny Club", "two@mergington.edu")
            .await
            .unwrap();

        assert_eq!(tiny.participants.len(), 2);
        assert!(tiny.is_over_capacity());
    }

    #[tokio::test]
    async fn names_are_case_sensitive() {
        let service = ActivityServiceInMemory::seeded();
        assert!(service.get("chess club").await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_admit_one() {
        let service = Arc::new(ActivityServiceInMemory::seeded());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .signup("Science Club", "racer@mergington.edu")
                        .await
                        .is_ok()
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        let science = service.get("Science Club").await.unwrap();
        assert_eq!(
            science
                .participants
                .iter()
                .filter(|p| *p == "racer@mergington.edu")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn counters_track_mutations() {
        let service = ActivityServiceInMemory::seeded();
        let before = service.participant_count();

        service
            .signup("Drama Club", "count@mergington.edu")
            .await
            .unwrap();
        assert_eq!(service.participant_count(), before + 1);

        service
            .unregister("Drama Club", "count@mergington.edu")
            .await
            .unwrap();
        assert_eq!(service.participant_count(), before);
    }

    #[tokio::test]
    async fn empty_store_has_nothing() {
        let service = ActivityServiceInMemory::default();
        assert!(service.list().await.unwrap().is_empty());
        assert_eq!(service.participant_count(), 0);
    }
}
