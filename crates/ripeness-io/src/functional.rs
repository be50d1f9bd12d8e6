use std::path::Path;

use ripeness_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit RGB.
///
/// The format is guessed from the file content, so any format supported by
/// the image crate is accepted. Grayscale and alpha images are converted.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image containing the decoded pixels.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?
        .into_rgb8();

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = Image::new(size, img.into_raw())?;

    Ok(image)
}

/// Writes an 8-bit RGB image to the given file path.
///
/// The encoder is picked from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path, e.g. `out/apple_combined.jpg`.
/// * `image` - The image to encode.
pub fn write_image_rgb8(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    if image::ImageFormat::from_path(file_path).is_err() {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    image::save_buffer(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
    )
    .map_err(IoError::ImageEncodeError)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Result<Image<u8, 3>, IoError> {
        let size = ImageSize {
            width: 6,
            height: 4,
        };
        let data = (0..size.area())
            .flat_map(|i| [(i * 10) as u8, 128, 255 - (i * 10) as u8])
            .collect();
        Ok(Image::new(size, data)?)
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = gradient()?;
        write_image_rgb8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        // png is lossless
        let image_back = read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back.size(), image.size());
        assert_eq!(image_back.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn read_write_jpeg() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.jpg");

        write_image_rgb8(&file_path, &gradient()?)?;

        let image_back = read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back.width(), 6);
        assert_eq!(image_back.height(), 4);
        assert_eq!(image_back.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = read_image_any_rgb8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_corrupt_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("corrupt.png");
        std::fs::write(&file_path, b"definitely not a png")?;

        let res = read_image_any_rgb8(&file_path);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));

        Ok(())
    }

    #[test]
    fn write_onto_directory() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        // a directory squatting on the output name
        let file_path = tmp_dir.path().join("gradient.png");
        std::fs::create_dir(&file_path)?;

        let res = write_image_rgb8(&file_path, &gradient()?);
        match res {
            Err(err @ IoError::ImageEncodeError(_)) => {
                assert!(err.to_string().starts_with("Failed to encode the image."));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn write_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.unknown");

        let res = write_image_rgb8(&file_path, &gradient()?);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));

        Ok(())
    }
}
