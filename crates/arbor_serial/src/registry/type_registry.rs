use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use arbor_utils::TypeIdMap;
use arbor_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::de::TreeDeserializer;
use crate::ops::{Object, Serial};
use crate::registry::{GetTypeMeta, TypeMeta};
use crate::{ErrorKind, SerialError, Value};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of object types.
///
/// [Registering] a type stores its [`TypeMeta`], which is enough to create
/// and fill an instance knowing only the type's name or path.
///
/// Names are the bare identifiers, paths are module-qualified. When two
/// registered types share a name, the name becomes ambiguous and both are
/// only reachable through their paths.
///
/// # Example
///
/// ```
/// use arbor_serial::registry::TypeRegistry;
/// use arbor_serial::{Mapping, Serial, Value};
///
/// #[derive(Serial, Default)]
/// struct Hat {
///     #[serial(order = 1)]
///     size: u8,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Hat>();
///
/// let mut tree = Mapping::new();
/// tree.insert("size", 7);
///
/// let hat = registry.deserialize_by_name("Hat", &Value::Mapping(tree)).unwrap();
/// assert_eq!(hat.serial_object_info().type_name(), "Hat");
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    pub(crate) auto_registered: bool,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    // The type must not be registered yet.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let type_name = type_meta.type_name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                log::debug!("type name `{type_name}` is ambiguous, use the type path");
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, type_meta.type_id());
            }
        }

        type_path_to_id.insert(type_meta.type_path(), type_meta.type_id());
    }

    /// Registers `T` and its dependencies, unless `T` is already registered.
    ///
    /// # Example
    ///
    /// ```
    /// use core::any::TypeId;
    /// use arbor_serial::Serial;
    /// use arbor_serial::registry::TypeRegistry;
    ///
    /// #[derive(Serial, Default)]
    /// struct Animal {
    ///     #[serial(order = 1)]
    ///     name: String,
    /// }
    ///
    /// #[derive(Serial, Default)]
    /// struct Cat {
    ///     #[serial(parent)]
    ///     animal: Animal,
    ///     #[serial(order = 2)]
    ///     lives: u8,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register::<Cat>();
    ///
    /// assert!(registry.contains(TypeId::of::<Cat>()));
    /// assert!(registry.contains(TypeId::of::<Animal>()));
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        let registered = self.type_meta_table.try_insert(TypeId::of::<T>(), || {
            let meta = T::get_type_meta();
            log::debug!("registering `{}`", meta.type_path());
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        });
        if registered {
            T::register_dependencies(self);
        }
    }

    /// Registers every non-generic type marked `#[serial(auto_register)]`.
    ///
    /// Repeated calls are cheap and insert nothing twice.
    ///
    /// Returns `true` if automatic registration works on the current platform.
    /// Without the `auto_register` feature this does nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use arbor_serial::Serial;
    /// use arbor_serial::registry::TypeRegistry;
    ///
    /// #[derive(Serial, Default)]
    /// #[serial(auto_register)]
    /// struct Saddle {
    ///     #[serial(order = 1)]
    ///     worn: bool,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Saddle>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;

            if !self.auto_registered {
                auto_register::__register_types(self);
            }
            self.auto_registered
        }

        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Finds a type by its full path, e.g. `my_crate::pets::Cat`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        self.type_path_to_id
            .get(type_path)
            .and_then(|id| self.get(*id))
    }

    /// Finds a type by its bare name, e.g. `Cat`.
    ///
    /// Returns `None` for ambiguous names, see [`is_ambiguous`](Self::is_ambiguous).
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        self.type_name_to_id
            .get(type_name)
            .and_then(|id| self.get(*id))
    }

    /// Whether more than one registered type uses `type_name`.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Creates the type called `name` and fills it from `value`.
    ///
    /// `name` is tried as a type path first, then as a type name.
    pub fn deserialize_by_name(
        &self,
        name: &str,
        value: &Value,
    ) -> Result<Box<dyn Object>, SerialError> {
        self.deserialize_by_name_with(&TreeDeserializer::new(), name, value)
    }

    /// [`deserialize_by_name`](Self::deserialize_by_name) with a configured deserializer.
    pub fn deserialize_by_name_with(
        &self,
        deserializer: &TreeDeserializer,
        name: &str,
        value: &Value,
    ) -> Result<Box<dyn Object>, SerialError> {
        let meta = self
            .get_with_type_path(name)
            .or_else(|| self.get_with_type_name(name))
            .ok_or_else(|| ErrorKind::InvalidTargetType {
                type_path: name.to_owned(),
                reason: if self.is_ambiguous(name) {
                    "the name is shared by several types, use the type path"
                } else {
                    "no object type is registered under this name"
                },
            })?;

        let mut object = meta.create();
        let target: &mut dyn Serial = object.as_mut();
        deserializer.deserialize_into(target, value)?;
        Ok(object)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.type_path_to_id.keys())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::{ErrorKind, Mapping, Serial, Value};

    mod land {
        use crate::Serial;

        #[derive(Serial, Default)]
        pub struct Pet {
            #[serial(order = 1)]
            pub legs: u8,
        }
    }

    mod sea {
        use crate::Serial;

        #[derive(Serial, Default)]
        pub struct Pet {
            #[serial(order = 1)]
            pub fins: u8,
        }
    }

    #[derive(Serial, Default)]
    struct Owner {
        #[serial(order = 1)]
        name: String,
    }

    #[derive(Serial, Default)]
    struct Rider {
        #[serial(parent)]
        owner: Owner,
        #[serial(order = 2)]
        mounted: bool,
    }

    #[test]
    fn registers_parent_chain() {
        let mut registry = TypeRegistry::new();
        registry.register::<Rider>();
        registry.register::<Rider>();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(TypeId::of::<Owner>()));
        assert_eq!(registry.get_with_type_name("Owner").unwrap().type_name(), "Owner");
    }

    #[test]
    fn shared_names_need_paths() {
        let mut registry = TypeRegistry::new();
        registry.register::<land::Pet>();
        registry.register::<sea::Pet>();

        assert!(registry.is_ambiguous("Pet"));
        assert!(registry.get_with_type_name("Pet").is_none());

        let path = registry.get(TypeId::of::<sea::Pet>()).unwrap().type_path();
        assert!(path.ends_with("sea::Pet"));
        assert!(registry.get_with_type_path(path).is_some());

        let err = registry.deserialize_by_name("Pet", &Value::Null).err().unwrap();
        assert!(matches!(err.kind(), ErrorKind::InvalidTargetType { .. }));
    }

    #[test]
    fn deserializes_by_name() {
        let mut registry = TypeRegistry::new();
        registry.register::<Rider>();

        let mut tree = Mapping::new();
        tree.insert("name", "ann");
        tree.insert("mounted", true);

        let rider = registry.deserialize_by_name("Rider", &Value::Mapping(tree)).unwrap();
        let tree = crate::to_tree(&*rider).unwrap();
        assert_eq!(tree.get("name"), Some(&Value::from("ann")));
        assert_eq!(tree.get("mounted"), Some(&Value::from(true)));

        let err = registry.deserialize_by_name("Ghost", &Value::Null).err().unwrap();
        assert!(matches!(err.kind(), ErrorKind::InvalidTargetType { .. }));
    }
}
