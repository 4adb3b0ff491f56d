// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Aggregation of used blocks from a paginated cloud API.
//!
//! Two categories are collected and treated uniformly as "already in
//! use": the address range of every virtual network, and the cluster and
//! service subnets of every Kubernetes cluster. Pagination is driven to
//! exhaustion per category before moving on.

use crate::{ApiError, BlockInventory, InventoryError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size requested from the backing API.
pub const PER_PAGE: usize = 100;

/// A page-numbered list request. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    #[must_use]
    fn first() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
        }
    }

    #[must_use]
    fn next(self) -> Self {
        Self {
            page: self.page + 1,
            per_page: self.per_page,
        }
    }
}

/// One page of listed items. `last` is set on the final page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub last: bool,
}

/// A virtual network as reported by the inventory API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualNetwork {
    pub name: String,
    pub ip_range: String,
}

/// A Kubernetes cluster as reported by the inventory API. Subnet fields
/// may be empty on clusters still provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub cluster_subnet: String,
    pub service_subnet: String,
}

/// Paginated listing of virtual networks.
pub trait VirtualNetworkApi {
    /// List one page of virtual networks.
    ///
    /// # Errors
    /// Fails if the request cannot be served.
    fn list(&self, req: PageRequest) -> Result<Page<VirtualNetwork>, ApiError>;
}

/// Paginated listing of Kubernetes clusters.
pub trait ClusterApi {
    /// List one page of clusters.
    ///
    /// # Errors
    /// Fails if the request cannot be served.
    fn list(&self, req: PageRequest) -> Result<Page<Cluster>, ApiError>;
}

/// [`BlockInventory`] over the two cloud categories.
#[derive(Debug, Clone)]
pub struct CloudInventory<V, C> {
    vnets: V,
    clusters: C,
}

impl<V: VirtualNetworkApi, C: ClusterApi> CloudInventory<V, C> {
    pub fn new(vnets: V, clusters: C) -> Self {
        Self { vnets, clusters }
    }

    fn collect_vnet_ranges(&self) -> Result<Vec<String>, ApiError> {
        let mut ranges = Vec::new();
        let mut req = PageRequest::first();
        loop {
            let Page { items, last } = self.vnets.list(req)?;
            ranges.extend(items.into_iter().map(|vnet| vnet.ip_range));
            if last {
                break;
            }
            req = req.next();
        }
        Ok(ranges)
    }

    fn collect_cluster_subnets(&self) -> Result<Vec<String>, ApiError> {
        let mut subnets = Vec::new();
        let mut req = PageRequest::first();
        loop {
            let Page { items, last } = self.clusters.list(req)?;
            for cluster in items {
                if !cluster.cluster_subnet.is_empty() {
                    subnets.push(cluster.cluster_subnet);
                }
                if !cluster.service_subnet.is_empty() {
                    subnets.push(cluster.service_subnet);
                }
            }
            if last {
                break;
            }
            req = req.next();
        }
        Ok(subnets)
    }
}

impl<V: VirtualNetworkApi, C: ClusterApi> BlockInventory for CloudInventory<V, C> {
    fn list_used_blocks(&self) -> Result<Vec<String>, InventoryError> {
        let mut blocks = self
            .collect_vnet_ranges()
            .map_err(InventoryError::VirtualNetworks)?;
        blocks.extend(
            self.collect_cluster_subnets()
                .map_err(InventoryError::Clusters)?,
        );
        debug!("collected {} used blocks", blocks.len());
        Ok(blocks)
    }
}
