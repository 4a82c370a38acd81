// Populates scene groups as their models finish loading.

use rand::Rng;

use super::join::Join;
use super::placement::{
    central_placement, populate_ring, ORBIT_LAYOUT, ORBIT_VARIANTS, SATELLITE_LAYOUT,
    SATELLITE_VARIANTS,
};
use super::scene::{GroupId, ModelKind, Scene};

pub struct SceneAssembly<R> {
    orbit: Join<ModelKind>,
    satellite: Join<ModelKind>,
    central: Join<ModelKind>,
    rng: R,
}

impl<R: Rng> SceneAssembly<R> {
    pub fn new(rng: R) -> Self {
        let orbit_kinds: Vec<ModelKind> = ORBIT_VARIANTS.iter().map(|v| v.kind).collect();
        let satellite_kinds: Vec<ModelKind> =
            SATELLITE_VARIANTS.iter().map(|v| v.kind).collect();
        Self {
            orbit: Join::new(&orbit_kinds),
            satellite: Join::new(&satellite_kinds),
            central: Join::new(&[ModelKind::IceCream]),
            rng,
        }
    }

    /// Feed one completed model load. Returns the group that became
    /// populated as a result, if any. Safe to call repeatedly for the same
    /// kind: a group is only ever populated once.
    pub fn model_loaded(&mut self, kind: ModelKind, scene: &mut Scene) -> Option<GroupId> {
        if self.central.mark(kind) && self.central.poll() {
            scene.central.children.push(central_placement());
            return Some(GroupId::Central);
        }
        if self.orbit.mark(kind) && self.orbit.poll() {
            populate_ring(&mut scene.orbit, &ORBIT_LAYOUT, &ORBIT_VARIANTS, &mut self.rng);
            return Some(GroupId::Orbit);
        }
        if self.satellite.mark(kind) && self.satellite.poll() {
            populate_ring(
                &mut scene.satellite,
                &SATELLITE_LAYOUT,
                &SATELLITE_VARIANTS,
                &mut self.rng,
            );
            return Some(GroupId::Satellite);
        }
        None
    }

    /// Models the given group is still waiting for.
    pub fn pending(&self, group: GroupId) -> Vec<ModelKind> {
        match group {
            GroupId::Central => self.central.missing().collect(),
            GroupId::Orbit => self.orbit.missing().collect(),
            GroupId::Satellite => self.satellite.missing().collect(),
        }
    }
}
