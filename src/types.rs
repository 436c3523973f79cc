/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// World-to-view matrix, column major
    pub view: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout_is_std140_friendly() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 96);
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn test_uniform_casts_to_bytes() {
        let uniform = CameraUniform {
            view: [[0.0; 4]; 4],
            position: [1.0, 2.0, 3.0],
            _pad1: 0.0,
            forward: [0.0, 0.0, 1.0],
            _pad2: 0.0,
        };
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 96);
    }
}
