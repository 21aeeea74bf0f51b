use nalgebra::Vector2;

pub trait VectorExtensions {
    fn distance_to(&self, other: &Vector2<f32>) -> f32;

    /// Unit vector pointing from `self` to `target`, zero when both points coincide.
    fn direction_to(&self, target: &Vector2<f32>) -> Vector2<f32>;

    fn clamp_to(&self, min: &Vector2<f32>, max: &Vector2<f32>) -> Vector2<f32>;
}

impl VectorExtensions for Vector2<f32> {
    #[inline]
    fn distance_to(&self, other: &Vector2<f32>) -> f32 {
        (self - other).norm()
    }

    fn direction_to(&self, target: &Vector2<f32>) -> Vector2<f32> {
        let to_target = target - self;
        let distance = to_target.norm();

        if distance > 0.0 {
            to_target / distance
        } else {
            Vector2::zeros()
        }
    }

    fn clamp_to(&self, min: &Vector2<f32>, max: &Vector2<f32>) -> Vector2<f32> {
        Vector2::new(self.x.max(min.x).min(max.x), self.y.max(min.y).min(max.y))
    }
}
