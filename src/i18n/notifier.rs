//! Language-change notifier
//!
//! Owns the active locale for a session and fans changes out to subscribers
//! in registration order. Only the provider writes to it; components get a
//! handle to read the locale and subscribe. Delivery works on a snapshot of the subscriber
//! list and holds no borrow while a callback runs, so callbacks may
//! subscribe, unsubscribe or change the language again.

use super::detector::LocaleDetector;
use super::SupportedLocale;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn(SupportedLocale)>;

struct Subscriber {
    id: u64,
    callback: Callback,
}

struct NotifierInner {
    active: Cell<SupportedLocale>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
    persister: RefCell<Option<Rc<LocaleDetector>>>,
}

/// Single-writer publish/subscribe point for the active locale
#[derive(Clone)]
pub struct LanguageNotifier {
    inner: Rc<NotifierInner>,
}

impl LanguageNotifier {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(NotifierInner {
                active: Cell::new(SupportedLocale::default()),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                persister: RefCell::new(None),
            }),
        }
    }

    /// Currently active locale
    pub fn active(&self) -> SupportedLocale {
        self.inner.active.get()
    }

    /// Change the active locale by code.
    ///
    /// Unsupported codes are ignored and return `false`.
    pub(crate) fn change(&self, code: &str) -> bool {
        match SupportedLocale::from_code(code) {
            Some(locale) => {
                self.set_locale(locale);
                true
            }
            None => {
                log::debug!("Ignoring change to unsupported language '{}'", code);
                false
            }
        }
    }

    /// Change the active locale, persist it and notify subscribers
    pub(crate) fn set_locale(&self, locale: SupportedLocale) {
        let previous = self.inner.active.replace(locale);
        log::info!("Language changed: {} -> {}", previous, locale);

        let persister = self.inner.persister.borrow().clone();
        if let Some(persister) = persister {
            persister.persist(locale);
        }

        self.notify(locale);
    }

    /// Register a callback for every future change
    #[must_use = "dropping the subscription unsubscribes the callback"]
    pub fn subscribe(&self, callback: impl Fn(SupportedLocale) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::new(callback),
        });

        Subscription {
            id,
            notifier: Rc::downgrade(&self.inner),
        }
    }

    /// Install the persister called on every change
    pub(crate) fn attach_persister(&self, persister: Rc<LocaleDetector>) {
        *self.inner.persister.borrow_mut() = Some(persister);
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn notify(&self, locale: SupportedLocale) {
        let snapshot: Vec<(u64, Callback)> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|subscriber| (subscriber.id, Rc::clone(&subscriber.callback)))
            .collect();

        for (id, callback) in snapshot {
            // Unsubscribed by an earlier callback in this same delivery
            if !self.inner.is_subscribed(id) {
                continue;
            }
            callback(locale);
        }
    }
}

impl NotifierInner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.borrow().iter().any(|subscriber| subscriber.id == id)
    }

    fn remove(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|subscriber| subscriber.id != id);
    }
}

impl Default for LanguageNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LanguageNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageNotifier")
            .field("active", &self.active())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

/// Handle for a registered callback. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    notifier: Weak<NotifierInner>,
}

impl Subscription {
    /// Deregister the callback now
    pub fn unsubscribe(self) {}

    /// Whether the callback is still registered
    pub fn is_active(&self) -> bool {
        self.notifier
            .upgrade()
            .map(|inner| inner.is_subscribed(self.id))
            .unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.notifier.upgrade() {
            inner.remove(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, PreferenceStorage};

    type Log = Rc<RefCell<Vec<(&'static str, SupportedLocale)>>>;

    fn recorder() -> (Log, impl Fn(&'static str) -> Box<dyn Fn(SupportedLocale)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |name: &'static str| {
            let sink = Rc::clone(&sink);
            Box::new(move |locale: SupportedLocale| sink.borrow_mut().push((name, locale)))
                as Box<dyn Fn(SupportedLocale)>
        };
        (log, make)
    }

    #[test]
    fn test_notifies_in_registration_order() {
        let notifier = LanguageNotifier::new();
        let (log, make) = recorder();

        let _a = notifier.subscribe(make("a"));
        let _b = notifier.subscribe(make("b"));
        let _c = notifier.subscribe(make("c"));

        assert!(notifier.change("es"));
        assert_eq!(notifier.active(), SupportedLocale::Es);
        assert_eq!(
            *log.borrow(),
            vec![
                ("a", SupportedLocale::Es),
                ("b", SupportedLocale::Es),
                ("c", SupportedLocale::Es),
            ]
        );
    }

    #[test]
    fn test_unsupported_code_is_ignored() {
        let notifier = LanguageNotifier::new();
        let (log, make) = recorder();
        let _a = notifier.subscribe(make("a"));

        assert!(!notifier.change("fr"));
        assert!(!notifier.change("en-US"));
        assert_eq!(notifier.active(), SupportedLocale::En);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let notifier = LanguageNotifier::new();
        let (log, make) = recorder();

        let a = notifier.subscribe(make("a"));
        let b = notifier.subscribe(make("b"));
        assert_eq!(notifier.subscriber_count(), 2);

        a.unsubscribe();
        notifier.change("es");
        assert_eq!(*log.borrow(), vec![("b", SupportedLocale::Es)]);

        drop(b);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_during_delivery_skips_later_callback() {
        let notifier = LanguageNotifier::new();
        let (log, make) = recorder();

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&victim);
        let _killer = notifier.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        *victim.borrow_mut() = Some(notifier.subscribe(make("victim")));

        notifier.change("es");
        assert!(log.borrow().is_empty());
        assert_eq!(notifier.subscriber_count(), 1);
    }

    #[test]
    fn test_subscribe_during_delivery_waits_for_next_change() {
        let notifier = LanguageNotifier::new();
        let (log, make) = recorder();

        let late: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let holder = Rc::clone(&late);
        let handle = notifier.clone();
        let make = Rc::new(make);
        let factory = Rc::clone(&make);
        let _spawner = notifier.subscribe(move |_| {
            if holder.borrow().is_empty() {
                holder.borrow_mut().push(handle.subscribe(factory("late")));
            }
        });

        notifier.change("es");
        assert!(log.borrow().is_empty());

        notifier.change("en");
        assert_eq!(*log.borrow(), vec![("late", SupportedLocale::En)]);
    }

    #[test]
    fn test_reentrant_change_does_not_panic() {
        let notifier = LanguageNotifier::new();
        let handle = notifier.clone();
        let _bounce = notifier.subscribe(move |locale| {
            if locale == SupportedLocale::Es {
                handle.change("en");
            }
        });

        notifier.change("es");
        assert_eq!(notifier.active(), SupportedLocale::En);
    }

    #[test]
    fn test_change_persists_through_attached_detector() {
        let notifier = LanguageNotifier::new();
        let storage = Rc::new(MemoryStorage::new());
        notifier.attach_persister(Rc::new(LocaleDetector::new(storage.clone(), "i18nextLng")));

        notifier.change("es");
        assert_eq!(storage.get_item("i18nextLng").unwrap().as_deref(), Some("es"));

        notifier.change("de");
        assert_eq!(storage.get_item("i18nextLng").unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_subscription_outliving_notifier() {
        let notifier = LanguageNotifier::new();
        let subscription = notifier.subscribe(|_| {});
        assert!(subscription.is_active());

        drop(notifier);
        assert!(!subscription.is_active());
        drop(subscription);
    }
}
