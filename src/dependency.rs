//! Pre-write checks shared by every resource service.
//!
//! A write runs through [`WriteStage`]s in a fixed order:
//! the uniqueness check first, then one existence check per foreign key in
//! declaration order, then persistence. Field validation collects every
//! failure, but these checks stop at the first miss: later lookups are never
//! issued. Nothing is persisted unless every check passed.

use futures::future::BoxFuture;
use strum::Display;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::merge::Mergeable;
use crate::models::{Entity, ResourceKind};
use crate::repositories::Repository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum WriteStage {
    Validating,
    MergingOrBuilding,
    CheckingUniqueness,
    CheckingDependencies,
    Persisting,
    Done,
}

impl WriteStage {
    pub fn enter(self, kind: ResourceKind) {
        debug!(resource = %kind, stage = %self, "write stage");
    }

    fn reject(self, kind: ResourceKind, error: ServiceError) -> ServiceError {
        info!(resource = %kind, stage = %self, error = %error, "write rejected");
        error
    }
}

/// Checks that a candidate's unique field is not taken by another row.
pub struct UniquenessCheck<'a> {
    kind: ResourceKind,
    field: &'static str,
    candidate: String,
    exempt: bool,
    lookup: BoxFuture<'a, Result<bool, ServiceError>>,
}

impl<'a> UniquenessCheck<'a> {
    pub fn for_create<E: Entity>(candidate: &E, repository: &'a dyn Repository<E>) -> Self {
        Self::build(candidate, None, repository)
    }

    /// The entity's own pre-update value never counts as a collision.
    pub fn for_update<E: Entity>(
        candidate: &E,
        current: &E,
        repository: &'a dyn Repository<E>,
    ) -> Self {
        Self::build(candidate, Some(current), repository)
    }

    fn build<E: Entity>(
        candidate: &E,
        current: Option<&E>,
        repository: &'a dyn Repository<E>,
    ) -> Self {
        let key = candidate.unique_key();
        let exempt = current.map(|current| current.unique_key() == key).unwrap_or(false);
        let lookup_key = key.clone();
        Self {
            kind: E::KIND,
            field: E::UNIQUE_FIELD,
            candidate: key,
            exempt,
            lookup: Box::pin(async move { repository.exists(&lookup_key).await }),
        }
    }

    pub async fn check(self) -> Result<(), ServiceError> {
        if self.exempt {
            return Ok(());
        }
        if self.lookup.await? {
            return Err(ServiceError::ResourceAlreadyExists {
                kind: self.kind,
                field: self.field,
                value: self.candidate,
            });
        }
        Ok(())
    }
}

/// A foreign key on the candidate paired with the lookup that proves it exists.
///
/// The lookup is lazy; it only runs when the reference is resolved.
pub struct DependencyRef<'a> {
    kind: ResourceKind,
    id: i64,
    lookup: BoxFuture<'a, Result<bool, ServiceError>>,
}

impl<'a> DependencyRef<'a> {
    pub fn new<D: Entity>(id: i64, repository: &'a dyn Repository<D>) -> Self {
        Self {
            kind: D::KIND,
            id,
            lookup: Box::pin(async move { Ok(repository.get(id).await?.is_some()) }),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub async fn resolve(self) -> Result<(), ServiceError> {
        if self.lookup.await? {
            Ok(())
        } else {
            Err(ServiceError::DependentResourceNotFound {
                kind: self.kind,
                id: self.id,
            })
        }
    }
}

/// Ordered checks guarding one write.
#[must_use]
pub struct WriteCheck<'a> {
    kind: ResourceKind,
    uniqueness: Option<UniquenessCheck<'a>>,
    dependencies: Vec<DependencyRef<'a>>,
}

impl<'a> WriteCheck<'a> {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            uniqueness: None,
            dependencies: Vec::new(),
        }
    }

    pub fn unique(mut self, check: UniquenessCheck<'a>) -> Self {
        self.uniqueness = Some(check);
        self
    }

    pub fn dependencies(mut self, dependencies: Vec<DependencyRef<'a>>) -> Self {
        self.dependencies.extend(dependencies);
        self
    }

    pub async fn run(self) -> Result<(), ServiceError> {
        let kind = self.kind;

        if let Some(check) = self.uniqueness {
            WriteStage::CheckingUniqueness.enter(kind);
            check
                .check()
                .await
                .map_err(|err| WriteStage::CheckingUniqueness.reject(kind, err))?;
        }

        WriteStage::CheckingDependencies.enter(kind);
        for dependency in self.dependencies {
            dependency
                .resolve()
                .await
                .map_err(|err| WriteStage::CheckingDependencies.reject(kind, err))?;
        }
        Ok(())
    }
}

/// Loads a row by primary key, mapping a miss to `ResourceNotFound`.
pub async fn find_existing<E: Entity>(
    repository: &dyn Repository<E>,
    id: i64,
) -> Result<E, ServiceError> {
    repository
        .get(id)
        .await?
        .ok_or(ServiceError::ResourceNotFound { kind: E::KIND, id })
}

/// Runs the create protocol: uniqueness, dependencies, then `save`.
pub async fn create_checked<'a, E: Entity>(
    repository: &'a dyn Repository<E>,
    candidate: E,
    dependencies: Vec<DependencyRef<'a>>,
) -> Result<E, ServiceError> {
    WriteCheck::new(E::KIND)
        .unique(UniquenessCheck::for_create(&candidate, repository))
        .dependencies(dependencies)
        .run()
        .await?;

    WriteStage::Persisting.enter(E::KIND);
    let saved = repository.save(candidate).await?;
    WriteStage::Done.enter(E::KIND);
    Ok(saved)
}

/// Runs the update protocol: load, merge, uniqueness (self-exempt),
/// dependencies of the merged entity, then `update`.
pub async fn update_checked<'a, E, F>(
    repository: &'a dyn Repository<E>,
    id: i64,
    patch: &E::Patch,
    dependencies: F,
) -> Result<E, ServiceError>
where
    E: Entity + Mergeable,
    F: FnOnce(&E) -> Vec<DependencyRef<'a>>,
{
    let current = find_existing(repository, id).await?;

    WriteStage::MergingOrBuilding.enter(E::KIND);
    let candidate = current.merge(patch);

    WriteCheck::new(E::KIND)
        .unique(UniquenessCheck::for_update(&candidate, &current, repository))
        .dependencies(dependencies(&candidate))
        .run()
        .await?;

    WriteStage::Persisting.enter(E::KIND);
    let updated = repository.update(candidate).await?;
    WriteStage::Done.enter(E::KIND);
    Ok(updated)
}
