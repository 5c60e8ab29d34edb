use crate::ports::outbound::DescriptorFinder;
use crate::shared::Result;
use futures::future::join_all;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// DescriptorLocator service - deterministic descriptor discovery
///
/// Delegates the actual file search to the [`DescriptorFinder`] port, one
/// concurrent search per workspace root, then deduplicates paths reachable
/// from overlapping roots and sorts them so repeated runs produce the same
/// output regardless of the underlying listing order.
pub struct DescriptorLocator;

impl DescriptorLocator {
    pub async fn locate<F: DescriptorFinder>(
        finder: &F,
        roots: &[PathBuf],
        exclude_patterns: &[String],
    ) -> Result<Vec<PathBuf>> {
        let searches = roots
            .iter()
            .map(|root| finder.find_descriptors(root, exclude_patterns));

        let mut unique = BTreeSet::new();
        for found in join_all(searches).await {
            unique.extend(found?);
        }

        Ok(unique.into_iter().collect())
    }
}
