//! [`Notifications`] state.

use std::collections::HashSet;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};

use crate::domain::{notification, Notification};

use super::Collection;

/// [`DateTime`] when [`Notification`]s were fetched last time.
pub type FetchDateTime = DateTimeOf<(Notifications, unit::Fetch)>;

/// State of [`Notification`]s.
///
/// [`Notifications::unread_count()`] always equals the number of unread
/// [`Notification`]s held.
#[derive(Debug, Default)]
pub struct Notifications {
    /// Loaded [`Notification`]s, newest first.
    pub list: Collection<Notification>,

    /// Number of unread [`Notification`]s.
    unread_count: usize,

    /// [`DateTime`] when [`Notification`]s were fetched last time.
    pub last_fetched: Option<FetchDateTime>,
}

impl Notifications {
    /// Returns the number of unread [`Notification`]s.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Returns the [`Notification`]s, newest first.
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        self.list.items()
    }

    /// Returns the [`Notification`] with the provided [`notification::Id`].
    #[must_use]
    pub fn get(&self, id: &notification::Id) -> Option<&Notification> {
        self.items().iter().find(|n| n.id == *id)
    }

    /// Recounts unread [`Notification`]s.
    pub(crate) fn recount(&mut self) {
        self.unread_count = self.items().iter().filter(|n| !n.read).count();
    }

    /// Adds the provided [`Notification`] to the top.
    pub fn add(&mut self, notification: Notification) {
        if !notification.read {
            self.unread_count += 1;
        }
        self.list.items_mut().insert(0, notification);
    }

    /// Marks the [`Notification`] with the provided [`notification::Id`] as
    /// read.
    ///
    /// Returns `false` if there is no such unread [`Notification`].
    pub fn mark_read(&mut self, id: &notification::Id) -> bool {
        let Some(n) = self
            .list
            .items_mut()
            .iter_mut()
            .find(|n| n.id == *id && !n.read)
        else {
            return false;
        };
        n.read = true;
        self.unread_count = self.unread_count.saturating_sub(1);
        true
    }

    /// Marks all the [`Notification`]s as read.
    pub fn mark_all_read(&mut self) {
        for n in self.list.items_mut() {
            n.read = true;
        }
        self.unread_count = 0;
    }

    /// Removes the [`Notification`] with the provided [`notification::Id`].
    pub fn remove(&mut self, id: &notification::Id) -> Option<Notification> {
        let items = self.list.items_mut();
        let pos = items.iter().position(|n| n.id == *id)?;
        let removed = items.remove(pos);
        if !removed.read {
            self.unread_count = self.unread_count.saturating_sub(1);
        }
        Some(removed)
    }

    /// Removes all the [`Notification`]s.
    pub fn clear(&mut self) {
        self.list.items_mut().clear();
        self.unread_count = 0;
    }

    /// Merges the provided [`Notification`]s built from recent
    /// [`notification::Action`]s, skipping already present ones.
    ///
    /// The result is ordered newest first and capped at `max` items.
    pub fn load_recent(&mut self, recent: Vec<Notification>, max: usize) {
        let items = self.list.items_mut();
        let mut known =
            items.iter().map(|n| n.id.clone()).collect::<HashSet<_>>();
        let fresh = recent
            .into_iter()
            .filter(|n| known.insert(n.id.clone()))
            .collect::<Vec<_>>();
        _ = items.splice(0..0, fresh);
        items.sort_by(|a, b| b.time.cmp(&a.time));
        items.truncate(max);

        self.recount();
        self.last_fetched = Some(FetchDateTime::now());
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::domain::{
        notification::{self, EmissionDateTime},
        Notification,
    };

    use super::Notifications;

    fn notification(id: &str, minutes_ago: u64, read: bool) -> Notification {
        let mut n = Notification::from(notification::Draft {
            id: Some(id.into()),
            title: id.to_owned(),
            time: Some(
                EmissionDateTime::from_unix_timestamp(1_700_000_000).unwrap()
                    - Duration::from_secs(minutes_ago * 60),
            ),
            ..notification::Draft::default()
        });
        n.read = read;
        n
    }

    fn ids(n: &Notifications) -> Vec<String> {
        n.items().iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn mark_read_decrements_exactly_once() {
        let mut n = Notifications::default();
        n.add(notification("a", 1, false));
        n.add(notification("b", 2, false));
        assert_eq!(n.unread_count(), 2);

        assert!(n.mark_read(&"a".into()));
        assert_eq!(n.unread_count(), 1);

        assert!(!n.mark_read(&"a".into()));
        assert_eq!(n.unread_count(), 1);

        assert!(!n.mark_read(&"missing".into()));
        assert_eq!(n.unread_count(), 1);
    }

    #[test]
    fn remove_and_clear_keep_count_consistent() {
        let mut n = Notifications::default();
        n.add(notification("a", 1, true));
        n.add(notification("b", 2, false));

        assert!(n.remove(&"a".into()).is_some());
        assert_eq!(n.unread_count(), 1);
        assert!(n.remove(&"b".into()).is_some());
        assert_eq!(n.unread_count(), 0);
        assert!(n.remove(&"b".into()).is_none());

        n.add(notification("c", 3, false));
        n.mark_all_read();
        assert_eq!(n.unread_count(), 0);
        n.clear();
        assert!(n.items().is_empty());
    }

    #[test]
    fn load_recent_merges_newest_first_with_cap() {
        let mut n = Notifications::default();
        n.add(notification("old", 30, true));
        n.add(notification("mid", 10, false));

        n.load_recent(
            vec![
                notification("mid", 10, false),
                notification("new", 1, false),
                notification("older", 60, false),
            ],
            3,
        );

        assert_eq!(ids(&n), vec!["new", "mid", "old"]);
        assert_eq!(n.unread_count(), 2);
        assert!(n.last_fetched.is_some());
    }
}
