use crate::components::{AnchorId, ElementBounds, RevealAnimation, RevealTarget};
use crate::entity::ElementId;
use crate::selection::SelectionSet;
use crate::viewport::is_intersecting;
use foundation::geometry::Rect;
use foundation::handles::Handle;
use foundation::time::Time;
use motion::player;
use motion::style::StyleSample;
use runtime::Frame;

/// The animated elements of one page, stored as parallel component arrays.
///
/// Elements are spawned at composition time and never despawned; all state
/// is discarded with the page session.
#[derive(Debug, Default)]
pub struct PageWorld {
    next_index: u32,
    bounds: Vec<Option<ElementBounds>>,
    reveals: Vec<Option<RevealTarget>>,
    animations: Vec<Option<RevealAnimation>>,
    anchors: Vec<Option<AnchorId>>,
}

impl PageWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> ElementId {
        let id = ElementId(Handle::new(self.next_index, 0));
        self.next_index += 1;
        self.ensure_capacity(id.index() as usize);
        id
    }

    pub fn len(&self) -> usize {
        self.next_index as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    pub fn set_bounds(&mut self, element: ElementId, bounds: ElementBounds) {
        self.ensure_capacity(element.index() as usize);
        self.bounds[element.index() as usize] = Some(bounds);
    }

    pub fn bounds(&self, element: ElementId) -> Option<ElementBounds> {
        self.bounds.get(element.index() as usize).and_then(|b| *b)
    }

    pub fn set_reveal(&mut self, element: ElementId, reveal: RevealTarget) {
        self.ensure_capacity(element.index() as usize);
        self.reveals[element.index() as usize] = Some(reveal);
    }

    pub fn reveal(&self, element: ElementId) -> Option<RevealTarget> {
        self.reveals.get(element.index() as usize).and_then(|r| *r)
    }

    pub fn set_animation(&mut self, element: ElementId, animation: RevealAnimation) {
        self.ensure_capacity(element.index() as usize);
        self.animations[element.index() as usize] = Some(animation);
    }

    pub fn animation(&self, element: ElementId) -> Option<RevealAnimation> {
        self.animations
            .get(element.index() as usize)
            .and_then(|a| *a)
    }

    pub fn set_anchor(&mut self, element: ElementId, anchor: AnchorId) {
        self.ensure_capacity(element.index() as usize);
        self.anchors[element.index() as usize] = Some(anchor);
    }

    /// Resolves a navigation anchor to its element.
    ///
    /// Anchors are unique by construction; the lowest index wins if a
    /// duplicate slips in.
    pub fn element_by_anchor(&self, anchor: &str) -> Option<ElementId> {
        self.anchors.iter().enumerate().find_map(|(idx, a)| {
            let a = a.as_ref()?;
            (a.as_str() == anchor).then(|| ElementId(Handle::new(idx as u32, 0)))
        })
    }

    /// Sweeps every reveal target against the current viewport and fires
    /// due `Hidden -> Revealed` transitions.
    ///
    /// All transitions in one sweep share the frame's time as their trigger
    /// timestamp, which is what makes stagger delays relative to a single
    /// shared event.
    ///
    /// Ordering contract:
    /// - Transitions fire, and the returned set iterates, in ascending
    ///   `ElementId::index()` order.
    pub fn observe_viewport(&mut self, viewport: Rect, frame: Frame) -> SelectionSet {
        let mut fired = SelectionSet::new();

        for (idx, reveal) in self.reveals.iter_mut().enumerate() {
            let Some(reveal) = reveal else { continue };
            if reveal.has_triggered() {
                continue;
            }
            let Some(bounds) = self.bounds.get(idx).and_then(|b| *b) else {
                continue;
            };

            if is_intersecting(viewport, bounds.rect, reveal.margin_px)
                && reveal.trigger(frame.time)
            {
                fired.insert_index(idx as u32);
            }
        }

        fired
    }

    /// Samples the element's entrance style at `now`.
    ///
    /// Elements without an animation render at rest; elements without a
    /// reveal target are treated as never triggered.
    pub fn style_at(&self, element: ElementId, now: Time) -> StyleSample {
        let Some(animation) = self.animation(element) else {
            return StyleSample::resting();
        };
        let revealed_at = self.reveal(element).and_then(|r| r.revealed_at());
        player::sample(&animation.spec, revealed_at, now)
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.bounds.len() <= idx {
            self.bounds.resize(idx + 1, None);
            self.reveals.resize(idx + 1, None);
            self.animations.resize(idx + 1, None);
            self.anchors.resize_with(idx + 1, || None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageWorld;
    use crate::components::{AnchorId, ElementBounds, RevealAnimation, RevealTarget};
    use foundation::geometry::{Rect, Vec2};
    use foundation::time::Time;
    use motion::player::AnimationSpec;
    use runtime::Frame;

    fn viewport_at(scroll_y: f64) -> Rect {
        Rect::from_origin_size(Vec2::new(0.0, scroll_y), 1280.0, 720.0)
    }

    fn frame_at(time_s: f64) -> Frame {
        Frame {
            index: 0,
            dt_s: 0.0,
            time: Time(time_s),
        }
    }

    fn world_with_section(top: f64) -> (PageWorld, crate::entity::ElementId) {
        let mut world = PageWorld::new();
        let e = world.spawn();
        world.set_bounds(
            e,
            ElementBounds::from_origin_size(Vec2::new(0.0, top), 1280.0, 600.0),
        );
        world.set_reveal(e, RevealTarget::new(-100.0));
        world.set_animation(e, RevealAnimation::new(AnimationSpec::fade_up(30.0, 600.0)));
        (world, e)
    }

    #[test]
    fn reveal_fires_once_and_never_reverts() {
        let (mut world, e) = world_with_section(2000.0);

        // Above the fold: nothing fires.
        let fired = world.observe_viewport(viewport_at(0.0), frame_at(0.0));
        assert!(fired.is_empty());
        assert!(!world.reveal(e).unwrap().has_triggered());

        // Scrolled to it: fires exactly once.
        let fired = world.observe_viewport(viewport_at(1900.0), frame_at(1.0));
        assert_eq!(fired.len(), 1);
        assert!(fired.contains(e));
        assert_eq!(world.reveal(e).unwrap().revealed_at(), Some(Time(1.0)));

        // Scrolled away and back: no second transition, timestamp keeps.
        assert!(
            world
                .observe_viewport(viewport_at(0.0), frame_at(2.0))
                .is_empty()
        );
        assert!(
            world
                .observe_viewport(viewport_at(1900.0), frame_at(3.0))
                .is_empty()
        );
        assert_eq!(world.reveal(e).unwrap().revealed_at(), Some(Time(1.0)));
    }

    #[test]
    fn element_in_view_at_mount_triggers_on_first_sweep() {
        let (mut world, e) = world_with_section(100.0);
        let fired = world.observe_viewport(viewport_at(0.0), frame_at(0.0));
        assert!(fired.contains(e));
    }

    #[test]
    fn sweep_fires_in_ascending_index_order() {
        let mut world = PageWorld::new();
        let mut ids = Vec::new();
        for i in 0..4 {
            let e = world.spawn();
            world.set_bounds(
                e,
                ElementBounds::from_origin_size(Vec2::new(0.0, 100.0 * i as f64), 100.0, 50.0),
            );
            world.set_reveal(e, RevealTarget::new(0.0));
            ids.push(e);
        }

        let fired = world.observe_viewport(viewport_at(0.0), frame_at(0.0));
        let got: Vec<u32> = fired.iter_indices().collect();
        assert_eq!(got, vec![0, 1, 2, 3]);
    }

    #[test]
    fn style_tracks_the_reveal_lifecycle() {
        let (mut world, e) = world_with_section(2000.0);

        // Hidden: the `from` style.
        let s = world.style_at(e, Time(0.5));
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.translate.y, 30.0);

        world.observe_viewport(viewport_at(1900.0), frame_at(1.0));

        // Long after the trigger: clamped at rest.
        let s = world.style_at(e, Time(10.0));
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.translate.y, 0.0);
    }

    #[test]
    fn anchors_resolve_to_elements() {
        let mut world = PageWorld::new();
        let a = world.spawn();
        let b = world.spawn();
        world.set_anchor(a, AnchorId::new("about"));
        world.set_anchor(b, AnchorId::new("team"));

        assert_eq!(world.element_by_anchor("team"), Some(b));
        assert_eq!(world.element_by_anchor("about"), Some(a));
        assert_eq!(world.element_by_anchor("missing"), None);
    }
}
