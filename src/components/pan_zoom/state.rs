use crate::components::explorer::PanZoomOptions;

/// Pointer travel (px) after which a press counts as a drag, not a click.
const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub fn css(&self) -> String {
		format!("translate({}px, {}px) scale({})", self.x, self.y, self.k)
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
	/// Set once the pointer travelled past [`DRAG_THRESHOLD`] during this press.
	pub moved: bool,
}

#[derive(Clone, Debug)]
pub struct PanZoomState {
	pub transform: ViewTransform,
	pub pan: PanState,
	/// Where `reset` returns to; the fitted view once [`Self::fit`] ran.
	home: ViewTransform,
	options: PanZoomOptions,
}

impl PanZoomState {
	pub fn new(options: PanZoomOptions) -> Self {
		Self {
			transform: ViewTransform::default(),
			pan: PanState::default(),
			home: ViewTransform::default(),
			options,
		}
	}

	/// Scales content of the given size down (never up) to fit the view and
	/// centres it. The result becomes the reset target.
	pub fn fit(&mut self, content_w: f64, content_h: f64, view_w: f64, view_h: f64) {
		if content_w <= 0.0 || content_h <= 0.0 || view_w <= 0.0 || view_h <= 0.0 {
			return;
		}
		let k = (view_w / content_w)
			.min(view_h / content_h)
			.min(1.0)
			.clamp(self.options.min_zoom, self.options.max_zoom);
		self.home = ViewTransform {
			x: (view_w - content_w * k) / 2.0,
			y: (view_h - content_h * k) / 2.0,
			k,
		};
		self.transform = self.home.clone();
	}

	/// Zooms one step in (`zoom_in`) or out, keeping the point under (x, y) fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) {
		let step = 1.0 + self.options.zoom_scale_sensitivity;
		let factor = if zoom_in { step } else { 1.0 / step };
		let new_k = (self.transform.k * factor).clamp(self.options.min_zoom, self.options.max_zoom);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn start_pan(&mut self, x: f64, y: f64) {
		self.pan.active = true;
		self.pan.start_x = x;
		self.pan.start_y = y;
		self.pan.transform_start_x = self.transform.x;
		self.pan.transform_start_y = self.transform.y;
		self.pan.moved = false;
	}

	/// Returns `true` when the transform moved.
	pub fn pan_to(&mut self, x: f64, y: f64) -> bool {
		if !self.pan.active {
			return false;
		}
		let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
		if dx.hypot(dy) > DRAG_THRESHOLD {
			self.pan.moved = true;
		}
		self.transform.x = self.pan.transform_start_x + dx;
		self.transform.y = self.pan.transform_start_y + dy;
		true
	}

	/// Whether the click that ends the current press should be swallowed
	/// because the press was a drag. Clears the flag.
	pub fn take_drag_click(&mut self) -> bool {
		std::mem::take(&mut self.pan.moved)
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	pub fn reset(&mut self) {
		self.transform = self.home.clone();
		self.pan = PanState::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> PanZoomState {
		PanZoomState::new(PanZoomOptions::default())
	}

	#[test]
	fn zoom_keeps_cursor_point_fixed() {
		let mut s = state();
		s.zoom_at(50.0, 80.0, true);
		// graph point under the cursor before zoom was (50, 80)
		let gx = (50.0 - s.transform.x) / s.transform.k;
		let gy = (80.0 - s.transform.y) / s.transform.k;
		assert!((gx - 50.0).abs() < 1e-9);
		assert!((gy - 80.0).abs() < 1e-9);
	}

	#[test]
	fn zoom_respects_ceiling_and_floor() {
		let mut s = state();
		for _ in 0..100 {
			s.zoom_at(0.0, 0.0, true);
		}
		assert_eq!(s.transform.k, PanZoomOptions::default().max_zoom);
		for _ in 0..200 {
			s.zoom_at(0.0, 0.0, false);
		}
		assert_eq!(s.transform.k, PanZoomOptions::default().min_zoom);
	}

	#[test]
	fn fit_shrinks_wide_content_and_centres_it() {
		let mut s = state();
		s.fit(2000.0, 500.0, 1000.0, 800.0);
		assert_eq!(s.transform, ViewTransform { x: 0.0, y: 275.0, k: 0.5 });

		s.zoom_at(0.0, 0.0, true);
		s.reset();
		assert_eq!(s.transform.k, 0.5);
	}

	#[test]
	fn fit_never_enlarges_and_respects_min_zoom() {
		let mut s = state();
		s.fit(100.0, 50.0, 1000.0, 800.0);
		assert_eq!(s.transform, ViewTransform { x: 450.0, y: 375.0, k: 1.0 });

		s.fit(100_000.0, 100.0, 1000.0, 800.0);
		assert_eq!(s.transform.k, PanZoomOptions::default().min_zoom);

		let before = s.transform.clone();
		s.fit(0.0, 10.0, 1000.0, 800.0);
		assert_eq!(s.transform, before);
	}

	#[test]
	fn drag_swallows_the_following_click_once() {
		let mut s = state();
		s.start_pan(10.0, 10.0);
		s.pan_to(11.0, 12.0);
		s.end_pan();
		assert!(!s.take_drag_click());

		s.start_pan(10.0, 10.0);
		s.pan_to(40.0, 10.0);
		s.end_pan();
		assert!(s.take_drag_click());
		assert!(!s.take_drag_click());

		// a new press starts clean even if no click followed the last drag
		s.start_pan(0.0, 0.0);
		s.pan_to(50.0, 0.0);
		s.end_pan();
		s.start_pan(0.0, 0.0);
		assert!(!s.take_drag_click());
	}

	#[test]
	fn pan_moves_only_while_active() {
		let mut s = state();
		assert!(!s.pan_to(10.0, 10.0));
		s.start_pan(10.0, 10.0);
		assert!(s.pan_to(25.0, 5.0));
		assert_eq!((s.transform.x, s.transform.y), (15.0, -5.0));
		s.end_pan();
		assert!(!s.pan_to(100.0, 100.0));
		s.reset();
		assert_eq!(s.transform, ViewTransform::default());
	}
}
