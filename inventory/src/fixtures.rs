// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! In-memory inventory implementations for tests.

use crate::cloud::{Cluster, ClusterApi, Page, PageRequest, VirtualNetwork, VirtualNetworkApi};
use crate::{ApiError, BlockInventory, InventoryError};

/// A fixed list of used blocks.
#[derive(Debug, Clone, Default)]
pub struct StaticInventory(Vec<String>);

impl StaticInventory {
    #[must_use]
    pub fn new<I, S>(blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(blocks.into_iter().map(Into::into).collect())
    }
}

impl BlockInventory for StaticInventory {
    fn list_used_blocks(&self) -> Result<Vec<String>, InventoryError> {
        Ok(self.0.clone())
    }
}

/// An inventory whose fetch always fails.
#[derive(Debug, Clone)]
pub struct FailingInventory(pub ApiError);

impl BlockInventory for FailingInventory {
    fn list_used_blocks(&self) -> Result<Vec<String>, InventoryError> {
        Err(InventoryError::VirtualNetworks(self.0.clone()))
    }
}

fn page_of<T: Clone>(pages: &[Vec<T>], req: PageRequest) -> Page<T> {
    let items = req
        .page
        .checked_sub(1)
        .and_then(|idx| pages.get(idx))
        .cloned()
        .unwrap_or_default();
    Page {
        items,
        last: req.page >= pages.len(),
    }
}

/// Scripted pages of virtual networks.
#[derive(Debug, Clone, Default)]
pub struct PagedVirtualNetworks {
    pages: Vec<Vec<VirtualNetwork>>,
    error: Option<ApiError>,
}

impl PagedVirtualNetworks {
    #[must_use]
    pub fn new(pages: Vec<Vec<VirtualNetwork>>) -> Self {
        Self { pages, error: None }
    }

    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        Self {
            pages: Vec::new(),
            error: Some(error),
        }
    }
}

impl VirtualNetworkApi for PagedVirtualNetworks {
    fn list(&self, req: PageRequest) -> Result<Page<VirtualNetwork>, ApiError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(page_of(&self.pages, req))
    }
}

/// Scripted pages of clusters.
#[derive(Debug, Clone, Default)]
pub struct PagedClusters {
    pages: Vec<Vec<Cluster>>,
    error: Option<ApiError>,
}

impl PagedClusters {
    #[must_use]
    pub fn new(pages: Vec<Vec<Cluster>>) -> Self {
        Self { pages, error: None }
    }

    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        Self {
            pages: Vec::new(),
            error: Some(error),
        }
    }
}

impl ClusterApi for PagedClusters {
    fn list(&self, req: PageRequest) -> Result<Page<Cluster>, ApiError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(page_of(&self.pages, req))
    }
}

/// Shorthand for a [`VirtualNetwork`] record.
#[must_use]
pub fn vnet(name: &str, ip_range: &str) -> VirtualNetwork {
    VirtualNetwork {
        name: name.to_string(),
        ip_range: ip_range.to_string(),
    }
}

/// Shorthand for a [`Cluster`] record.
#[must_use]
pub fn cluster(name: &str, cluster_subnet: &str, service_subnet: &str) -> Cluster {
    Cluster {
        name: name.to_string(),
        cluster_subnet: cluster_subnet.to_string(),
        service_subnet: service_subnet.to_string(),
    }
}
