use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::allocation::nearest::select_nearest;
use crate::error::AllocationError;
use crate::maps::{RouteProvider, RoutingProfile};
use crate::models::{CandidateDistance, Coordinates, RoutedDistance, VolunteerRequest};
use crate::scoring::calculate_distance;
use crate::services::notification::NotificationService;

pub const ROUTING_FALLBACK_NOTICE: &str =
    "Routing service unavailable, showing straight-line distances";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBatch {
    pub candidates: Vec<VolunteerRequest>,
    pub nearest: Option<usize>,
    /// False when the batch fell back to straight-line distances.
    pub routed: bool,
}

impl AllocationBatch {
    pub fn nearest_candidate(&self) -> Option<&VolunteerRequest> {
        self.nearest.and_then(|idx| self.candidates.get(idx))
    }
}

type Routes = BTreeMap<RoutingProfile, RoutedDistance>;

pub struct AllocationPlanner {
    hq: Coordinates,
    stagger: Duration,
    provider: Option<Arc<dyn RouteProvider>>,
    notifications: Arc<NotificationService>,
}

impl AllocationPlanner {
    pub fn new(
        hq: Coordinates,
        stagger: Duration,
        provider: Option<Arc<dyn RouteProvider>>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            hq,
            stagger,
            provider,
            notifications,
        }
    }

    /// Compute distances from headquarters for a batch of candidates and
    /// flag the nearest one.
    ///
    /// Routed distances are all-or-nothing: if any call fails the batch
    /// keeps straight-line distances only and a warning notice goes out.
    pub async fn compute_distances(
        &self,
        mut candidates: Vec<VolunteerRequest>,
        cancel: &CancellationToken,
    ) -> Result<AllocationBatch, AllocationError> {
        if cancel.is_cancelled() {
            return Err(AllocationError::Cancelled);
        }

        let straight: Vec<f64> = candidates
            .iter()
            .map(|c| calculate_distance(self.hq, c.coordinates))
            .collect();

        let routes = match &self.provider {
            Some(provider) if !candidates.is_empty() => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        tracing::info!(candidates = candidates.len(), "distance batch cancelled");
                        return Err(AllocationError::Cancelled);
                    }
                    routes = self.route_all(provider.as_ref(), &candidates) => routes,
                }
            }
            _ => None,
        };

        if self.provider.is_some() && !candidates.is_empty() && routes.is_none() {
            self.notifications.warn(ROUTING_FALLBACK_NOTICE);
        }

        let routed = routes.is_some();
        let mut routes = routes.unwrap_or_default().into_iter();
        for (candidate, km) in candidates.iter_mut().zip(&straight) {
            let mut distance = CandidateDistance::straight_line(*km);
            if let Some(r) = routes.next() {
                distance.routed = r;
            }
            candidate.distance = Some(distance);
            candidate.is_nearest = false;
        }

        let nearest = select_nearest(&straight);
        if let Some(idx) = nearest {
            candidates[idx].is_nearest = true;
            tracing::debug!(candidate = %candidates[idx].id, km = straight[idx], "nearest candidate");
        }

        Ok(AllocationBatch {
            candidates,
            nearest,
            routed,
        })
    }

    /// Candidate `i` starts after `stagger * i` to stay under the provider's
    /// rate limit; its profiles are requested concurrently.
    async fn route_all(
        &self,
        provider: &dyn RouteProvider,
        candidates: &[VolunteerRequest],
    ) -> Option<Vec<Routes>> {
        let hq = self.hq;
        let jobs = candidates.iter().enumerate().map(|(idx, candidate)| {
            let delay = self.stagger * idx as u32;
            let destination = candidate.coordinates;
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let legs = futures::future::join_all(
                    RoutingProfile::ALL
                        .iter()
                        .map(|&profile| provider.directions(hq, destination, profile)),
                )
                .await;
                RoutingProfile::ALL
                    .into_iter()
                    .zip(legs)
                    .map(|(profile, leg)| Some((profile, leg?.to_routed_distance())))
                    .collect::<Option<Routes>>()
            }
        });

        futures::future::join_all(jobs)
            .await
            .into_iter()
            .collect::<Option<Vec<Routes>>>()
    }
}
