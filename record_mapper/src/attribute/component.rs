//! How a containing type reaches one of its components.

use std::fmt;
use std::sync::Arc;

pub(super) type Project<S, T> = Arc<dyn Fn(&S) -> Option<&T> + Send + Sync>;
pub(super) type ProjectMut<S, T> = Arc<dyn Fn(&mut S) -> Option<&mut T> + Send + Sync>;
pub(super) type CreateComponent<S> = Arc<dyn Fn(&mut S) + Send + Sync>;

/// Projection from a containing type `S` to a component `T`, plus an optional
/// step that creates the component when it is missing.
///
/// Reads go through the shared projection only. Writes run the creation step
/// first, when one is present, and then the mutable projection. Leaving the
/// creation step out is deliberate: writing through an absent component then
/// fails with [`crate::MapperError::MissingComponent`].
pub struct ComponentAccess<S, T> {
    pub(super) get: Project<S, T>,
    pub(super) get_mut: ProjectMut<S, T>,
    pub(super) create: Option<CreateComponent<S>>,
}

impl<S: 'static, T: 'static> ComponentAccess<S, T> {
    /// Projection without a creation step.
    #[must_use]
    pub fn new<G, M>(get: G, get_mut: M) -> Self
    where
        G: Fn(&S) -> Option<&T> + Send + Sync + 'static,
        M: Fn(&mut S) -> Option<&mut T> + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            get_mut: Arc::new(get_mut),
            create: None,
        }
    }

    /// Projection onto a component stored in an `Option`, inserting
    /// `T::default()` the first time something is written through it.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_mapper::ComponentAccess;
    ///
    /// #[derive(Default)]
    /// struct Address;
    /// struct Person {
    ///     address: Option<Address>,
    /// }
    ///
    /// let access = ComponentAccess::optional(
    ///     |p: &Person| &p.address,
    ///     |p: &mut Person| &mut p.address,
    /// );
    /// assert!(access.has_creator());
    /// ```
    #[must_use]
    pub fn optional<G, M>(slot: G, slot_mut: M) -> Self
    where
        T: Default,
        G: Fn(&S) -> &Option<T> + Send + Sync + 'static,
        M: Fn(&mut S) -> &mut Option<T> + Send + Sync + 'static,
    {
        let shared_slot = Arc::new(slot_mut);
        let project_slot = Arc::clone(&shared_slot);
        Self::new(
            move |item: &S| slot(item).as_ref(),
            move |item: &mut S| project_slot(item).as_mut(),
        )
        .with_creator(move |item: &mut S| {
            shared_slot(item).get_or_insert_with(T::default);
        })
    }

    /// Attach a step that makes sure the component exists before a write.
    #[must_use]
    pub fn with_creator<F>(mut self, create: F) -> Self
    where
        F: Fn(&mut S) + Send + Sync + 'static,
    {
        self.create = Some(Arc::new(create));
        self
    }
}

impl<S, T> ComponentAccess<S, T> {
    /// Whether writes create the component when it is missing.
    #[must_use]
    pub const fn has_creator(&self) -> bool {
        self.create.is_some()
    }
}

impl<S, T> Clone for ComponentAccess<S, T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            get_mut: Arc::clone(&self.get_mut),
            create: self.create.clone(),
        }
    }
}

impl<S, T> fmt::Debug for ComponentAccess<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentAccess")
            .field("has_creator", &self.has_creator())
            .finish_non_exhaustive()
    }
}
