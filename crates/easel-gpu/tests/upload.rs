//! Upload-path tests that run headless, skipping when no adapter exists.

use easel_gpu::{load_rgba8, GpuDevice, SampledTexture, StagingWriter};

/// Spin up a headless device, or skip the test on machines without a GPU.
fn headless_device() -> Option<GpuDevice> {
    match pollster::block_on(GpuDevice::new_headless()) {
        Ok(gpu) => Some(gpu),
        Err(err) => {
            eprintln!("no GPU adapter available, skipping: {err:#}");
            None
        }
    }
}

#[test]
fn staging_layout_for_quad_payloads() {
    // 4 vertices of 20 bytes, 6 u16 indices, then a 2x2 RGBA8 image.
    let mut staging = StagingWriter::new();
    let vertex_offset = staging.push(&[0u8; 4 * 20]);
    let index_offset = staging.push(&[0u8; 6 * 2]);
    let image_offset = staging.push(&[0u8; 2 * 2 * 4]);

    assert_eq!(vertex_offset, 0);
    assert_eq!(index_offset, 80);
    assert_eq!(image_offset, 92);
    assert_eq!(staging.total(), 80 + 12 + 16);
}

#[test]
fn two_by_two_image_decodes_and_uploads() {
    let path = std::env::temp_dir().join("easel_gpu_red_2x2.png");
    image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]))
        .save(&path)
        .expect("failed to write test image");

    let decoded = load_rgba8(&path).expect("failed to decode test image");
    assert_eq!((decoded.width, decoded.height), (2, 2));
    assert_eq!(decoded.data.len(), 16);
    assert!(decoded
        .data
        .chunks(4)
        .all(|px| px == [255, 0, 0, 255].as_slice()));

    let Some(gpu) = headless_device() else { return };

    let texture = SampledTexture::new(gpu.device(), decoded.width, decoded.height, "red 2x2");
    assert_eq!(texture.width(), 2);
    assert_eq!(texture.height(), 2);
    assert_eq!(texture.texture().format(), SampledTexture::FORMAT);

    // A 2x2 image has an 8-byte row pitch, so it goes through write_texture
    // rather than a buffer-to-texture copy.
    gpu.queue().write_texture(
        texture.texture().as_image_copy(),
        &decoded.data,
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(decoded.bytes_per_row()),
            rows_per_image: Some(decoded.height),
        },
        texture.extent(),
    );
    gpu.queue().submit(std::iter::empty());
    let _ = gpu.device().poll(wgpu::Maintain::Wait);
}

#[test]
fn transfer_buffer_holds_staged_bytes() {
    let Some(gpu) = headless_device() else { return };

    let mut staging = StagingWriter::new();
    staging.push(&[1u8, 2, 3, 4]);
    staging.push(&[5u8, 6, 7, 8]);
    let buffer = staging.finish(gpu.device());
    assert_eq!(buffer.size(), 8);
    assert!(buffer.usage().contains(wgpu::BufferUsages::COPY_SRC));
}
