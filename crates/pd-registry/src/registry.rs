//! `PackageRegistry`: the id-keyed owner of every package record.

use pd_core::PackageId;

use crate::{Package, RegistryError, RegistryResult};

#[cfg(not(feature = "fx-hash"))]
type PackageMap = std::collections::HashMap<PackageId, Package>;

#[cfg(feature = "fx-hash")]
type PackageMap = rustc_hash::FxHashMap<PackageId, Package>;

/// Map from package id to its mutable record.
///
/// Iteration order of the underlying map is unspecified; use
/// [`sorted`][Self::sorted] or [`ids`][Self::ids] wherever output order
/// matters.
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    packages: PackageMap,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicatePackage`] if the id is already present.
    pub fn insert(&mut self, package: Package) -> RegistryResult<()> {
        let id = package.id;
        if self.packages.contains_key(&id) {
            return Err(RegistryError::DuplicatePackage(id));
        }
        self.packages.insert(id, package);
        Ok(())
    }

    #[inline]
    pub fn get(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PackageId) -> Option<&mut Package> {
        self.packages.get_mut(&id)
    }

    pub fn require(&self, id: PackageId) -> RegistryResult<&Package> {
        self.get(id).ok_or(RegistryError::UnknownPackage(id))
    }

    pub fn require_mut(&mut self, id: PackageId) -> RegistryResult<&mut Package> {
        self.get_mut(id).ok_or(RegistryError::UnknownPackage(id))
    }

    #[inline]
    pub fn contains(&self, id: PackageId) -> bool {
        self.packages.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// All package ids in ascending order.
    pub fn ids(&self) -> Vec<PackageId> {
        let mut ids: Vec<PackageId> = self.packages.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All packages in ascending id order.
    pub fn sorted(&self) -> Vec<&Package> {
        let mut all: Vec<&Package> = self.packages.values().collect();
        all.sort_unstable_by_key(|p| p.id);
        all
    }

    /// Unordered iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }
}
