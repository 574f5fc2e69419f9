//! Read API shared by every page: decides per call whether to answer from the
//! live store or from the embedded dataset.
//!
//! * Build phase: the embedded dataset is returned and the store is never
//!   touched.
//! * Otherwise the store is asked first. An error, or an empty answer while
//!   the embedded dataset has records, falls back to the embedded dataset.
//!   An empty featured list from a store that does hold providers is served
//!   as is.
//!
//! Read errors never leave this module; the worst case for a caller is
//! slightly stale data.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{models::VpnData, repository::VpnStore, static_data::static_vpns};

pub struct VpnResolver {
    store: Arc<dyn VpnStore>,
    build_phase: bool,
    fallback_on_empty: bool,
    fallback: Vec<VpnData>,
}

impl VpnResolver {
    pub fn new(store: Arc<dyn VpnStore>, build_phase: bool) -> Self {
        Self { store, build_phase, fallback_on_empty: true, fallback: static_vpns() }
    }

    /// Whether a reachable but empty store is answered from the embedded
    /// dataset (the default) or passed through as empty.
    pub fn fallback_on_empty(mut self, enabled: bool) -> Self {
        self.fallback_on_empty = enabled;
        self
    }

    pub fn with_static(mut self, mut vpns: Vec<VpnData>) -> Self {
        vpns.sort_by_key(|v| v.sort_order);
        self.fallback = vpns;
        self
    }

    pub fn is_build_phase(&self) -> bool {
        self.build_phase
    }

    pub async fn get_all_vpns(&self) -> Vec<VpnData> {
        if self.build_phase {
            debug!("build phase, serving static VPN list");
            return self.static_all();
        }

        match self.store.all().await {
            Ok(vpns) if !vpns.is_empty() => vpns,
            Ok(vpns) => {
                if self.fallback_on_empty && !self.fallback.is_empty() {
                    warn!("database returned no VPN providers, serving static list");
                    self.static_all()
                } else {
                    vpns
                }
            },
            Err(err) => {
                warn!(error = %err, "failed to load VPN providers, serving static list");
                self.static_all()
            },
        }
    }

    pub async fn get_featured_vpns(&self) -> Vec<VpnData> {
        if self.build_phase {
            debug!("build phase, serving static featured VPNs");
            return self.static_featured();
        }

        match self.store.featured().await {
            Ok(vpns) if !vpns.is_empty() => vpns,
            // An empty featured list only falls back when the full list would,
            // so featured stays a subset of what `get_all_vpns` serves.
            Ok(vpns) => match self.store.all().await {
                Ok(all) if !all.is_empty() => vpns,
                Ok(_) if !self.fallback_on_empty => vpns,
                Ok(_) => {
                    warn!("database returned no VPN providers, serving static featured list");
                    self.static_featured()
                },
                Err(err) => {
                    warn!(
                        error = %err,
                        "failed to load VPN providers, serving static featured list"
                    );
                    self.static_featured()
                },
            },
            Err(err) => {
                warn!(error = %err, "failed to load featured VPN providers, serving static list");
                self.static_featured()
            },
        }
    }

    pub async fn get_vpn_by_slug(&self, slug: &str) -> Option<VpnData> {
        if self.build_phase {
            debug!(slug = %slug, "build phase, serving static VPN");
            return self.static_by_slug(slug);
        }

        match self.store.by_slug(slug).await {
            Ok(Some(vpn)) => Some(vpn),
            Ok(None) if self.fallback_on_empty => {
                debug!(slug = %slug, "VPN not in database, checking static data");
                self.static_by_slug(slug)
            },
            Ok(None) => None,
            Err(err) => {
                warn!(
                    slug = %slug,
                    error = %err,
                    "failed to load VPN provider, serving static data"
                );
                self.static_by_slug(slug)
            },
        }
    }

    fn static_all(&self) -> Vec<VpnData> {
        self.fallback.clone()
    }

    fn static_featured(&self) -> Vec<VpnData> {
        self.fallback.iter().filter(|v| v.featured).cloned().collect()
    }

    fn static_by_slug(&self, slug: &str) -> Option<VpnData> {
        self.fallback.iter().find(|v| v.slug == slug).cloned()
    }
}
