use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, MessageKind},
    error::{invalid_input_error, invalid_state_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn request_route(&self, destination: Coordinates) -> Result<(), Error> {
        let (waypoints, token) = {
            let mut session = self.session.lock().await;

            let origin = match session.user_location() {
                Some(origin) => origin,
                None => {
                    session.ui.notify(
                        MessageKind::Error,
                        "User location not found. Please enable location services.",
                    );
                    return Ok(());
                }
            };

            session.clear_destination();

            let popup = format!("Destination: {}", session.ui.input);
            session.place_destination(destination, popup);

            let waypoints = vec![origin, destination];
            let token = session.begin_route(waypoints.clone());

            (waypoints, token)
        };

        self.plan_route(waypoints, token).await
    }

    #[tracing::instrument(skip(self))]
    async fn drag_waypoint(&self, index: usize, coordinates: Coordinates) -> Result<(), Error> {
        let (waypoints, token) = {
            let mut session = self.session.lock().await;

            let mut waypoints = session
                .route_waypoints()
                .ok_or_else(|| invalid_state_error())?
                .to_vec();

            let waypoint = waypoints
                .get_mut(index)
                .ok_or_else(|| invalid_input_error())?;
            *waypoint = coordinates;

            let token = session.begin_route(waypoints.clone());

            (waypoints, token)
        };

        self.plan_route(waypoints, token).await
    }
}

impl Engine {
    /// Asks the planner for a route and shows it, unless a newer request was
    /// made in the meantime.
    async fn plan_route(&self, waypoints: Vec<Coordinates>, token: u64) -> Result<(), Error> {
        let result = self.services.planner.plan(&waypoints).await;

        let mut session = self.session.lock().await;

        if !session.is_latest_route(token) {
            tracing::debug!("discarding stale route for request {}", token);
            return Ok(());
        }

        match result {
            Ok(route) => {
                tracing::info!(
                    "route planned: {:.0} m, {:.0} s",
                    route.distance,
                    route.duration
                );
                session.show_route(route);
            }
            Err(err) => {
                session.ui.notify(
                    MessageKind::Error,
                    format!("Route calculation failed: {}", err.message),
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{LocationAPI, RouteAPI, ViewAPI};
    use crate::engine::testing::*;
    use crate::entities::{Coordinates, MessageKind};
    use crate::error::{invalid_input_error, invalid_state_error};

    #[tokio::test]
    async fn route_before_location_test() {
        let (engine, mocks) = engine_with(Some(MockGeolocator::failing("timeout")));

        engine.acquire_location().await.unwrap();
        engine
            .request_route(Coordinates::new(14.55, 121.02))
            .await
            .unwrap();

        let snapshot = engine.snapshot().await;
        assert_eq!(snapshot.map.routes().count(), 0);
        assert_eq!(snapshot.map.markers().count(), 0);
        assert!(mocks.planner.requests().is_empty());

        let message = snapshot.ui.status.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(
            message.text,
            "User location not found. Please enable location services."
        );
    }

    #[tokio::test]
    async fn one_destination_pair_test() {
        let (engine, mocks) = engine_with(Some(MockGeolocator::at(USER)));
        engine.acquire_location().await.unwrap();

        for destination in [
            Coordinates::new(14.55, 121.02),
            Coordinates::new(14.6, 121.0),
            Coordinates::new(14.65, 121.05),
        ] {
            engine.request_route(destination).await.unwrap();

            let snapshot = engine.snapshot().await;
            assert_eq!(snapshot.map.markers().count(), 2);
            assert_eq!(snapshot.map.routes().count(), 1);

            let route = snapshot.map.routes().next().unwrap();
            assert_eq!(route.route.waypoints, vec![USER, destination]);
            assert!(route.reroute_on_drag);
        }

        assert_eq!(mocks.planner.requests().len(), 3);
    }

    #[tokio::test]
    async fn stale_plan_is_discarded_test() {
        let (engine, mocks) = engine_with(Some(MockGeolocator::at(USER)));
        let first = Coordinates::new(14.55, 121.02);
        let second = Coordinates::new(14.65, 121.05);

        engine.acquire_location().await.unwrap();
        let release = mocks.planner.hold(vec![USER, first]);

        let older = engine.request_route(first);
        let newer = async {
            engine.request_route(second).await.unwrap();
            release.send(()).unwrap();
        };

        let (older, _) = futures::join!(older, newer);
        older.unwrap();

        assert_eq!(
            mocks.planner.requests(),
            vec![vec![USER, first], vec![USER, second]]
        );

        let snapshot = engine.snapshot().await;
        let routes: Vec<_> = snapshot.map.routes().collect();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].route.waypoints, vec![USER, second]);

        let destinations: Vec<_> = snapshot
            .map
            .markers()
            .filter(|m| m.popup.starts_with("Destination: "))
            .collect();
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].coordinates, second);
    }

    #[tokio::test]
    async fn planner_failure_test() {
        let (engine, mocks) = engine_with(Some(MockGeolocator::at(USER)));
        mocks.planner.fail();

        engine.acquire_location().await.unwrap();
        engine
            .request_route(Coordinates::new(14.55, 121.02))
            .await
            .unwrap();

        let snapshot = engine.snapshot().await;
        assert_eq!(snapshot.map.routes().count(), 0);
        assert_eq!(
            snapshot.ui.status.message().unwrap().text,
            "Route calculation failed: Impossible route between points"
        );
    }

    #[tokio::test]
    async fn drag_waypoint_reroutes_test() {
        let (engine, mocks) = engine_with(Some(MockGeolocator::at(USER)));
        let destination = Coordinates::new(14.55, 121.02);
        let dragged = Coordinates::new(14.56, 121.03);

        engine.acquire_location().await.unwrap();
        engine.request_route(destination).await.unwrap();
        engine.drag_waypoint(1, dragged).await.unwrap();

        assert_eq!(
            mocks.planner.requests(),
            vec![vec![USER, destination], vec![USER, dragged]]
        );

        let snapshot = engine.snapshot().await;
        let routes: Vec<_> = snapshot.map.routes().collect();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].route.waypoints, vec![USER, dragged]);
    }

    #[tokio::test]
    async fn drag_without_route_test() {
        let (engine, _) = engine_with(Some(MockGeolocator::at(USER)));
        engine.acquire_location().await.unwrap();

        assert_eq!(
            engine
                .drag_waypoint(0, Coordinates::new(0.0, 0.0))
                .await
                .unwrap_err(),
            invalid_state_error()
        );

        engine
            .request_route(Coordinates::new(14.55, 121.02))
            .await
            .unwrap();
        assert_eq!(
            engine
                .drag_waypoint(2, Coordinates::new(0.0, 0.0))
                .await
                .unwrap_err(),
            invalid_input_error()
        );
    }
}
