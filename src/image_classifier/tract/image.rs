use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Stretches the image to exactly `width` x `height`, ignoring aspect ratio.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == width && image.height() == height {
        image.clone()
    } else {
        image.resize_exact(width, height, imageops::FilterType::Triangle)
    }
}

/// NCHW tensor with each channel scaled to 0..1 then standardized by
/// `(value - mean[c]) / std[c]`.
fn image_to_tensor(image: &DynamicImage, mean: [f32; 3], std: [f32; 3]) -> TractResult<Tensor> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let array = tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - mean[c]) / std[c]
    });

    Ok(array.into_tensor())
}

pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
    mean: [f32; 3],
    std: [f32; 3],
) -> TractResult<Tensor> {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, mean, std)
}
