//! Single-value publication with per-subscriber change tracking.
//!
//! Each UI surface (sidebar, top bar, arrows) holds its own [`Subscriber`] and
//! asks whether the value moved since it last looked.

#[derive(Clone, Debug)]
pub struct Watch<T> {
    value: T,
    version: u32,
}

/// Cursor into a [`Watch`]. Starts one version behind so the first poll
/// yields the current value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Subscriber {
    seen: u32,
}

impl<T> Watch<T> {
    pub const fn new(value: T) -> Self {
        Self { value, version: 1 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub const fn version(&self) -> u32 {
        self.version
    }

    pub fn publish(&mut self, value: T) {
        self.value = value;
        self.version = self.version.wrapping_add(1);
    }

    pub const fn subscribe(&self) -> Subscriber {
        Subscriber { seen: 0 }
    }

    pub fn changed(&self, subscriber: &mut Subscriber) -> Option<&T> {
        if subscriber.seen == self.version {
            return None;
        }
        subscriber.seen = self.version;
        Some(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_subscriber_sees_each_publication_once() {
        let mut watch = Watch::new(0u16);
        let mut sidebar = watch.subscribe();
        let mut arrows = watch.subscribe();

        assert_eq!(watch.changed(&mut sidebar), Some(&0));
        assert_eq!(watch.changed(&mut sidebar), None);

        watch.publish(2);
        assert_eq!(watch.changed(&mut sidebar), Some(&2));
        assert_eq!(watch.changed(&mut arrows), Some(&2));
        assert_eq!(watch.changed(&mut arrows), None);
    }
}
