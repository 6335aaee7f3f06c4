use blockview_io::RgbaImage;
use raylib::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureFilterMode {
    /// Nearest texel, the usual look for voxel atlases.
    #[default]
    Point,
    /// Trilinear sampling over generated mipmaps.
    Linear,
}

/// GPU texture bound to a fixed texture unit.
pub struct Texture {
    tex: Texture2D,
    unit: i32,
    filter: TextureFilterMode,
}

impl Texture {
    /// Uploads `img` as-is; rows are expected bottom-up already.
    pub fn from_image(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        img: &RgbaImage,
        unit: i32,
        filter: TextureFilterMode,
    ) -> Option<Self> {
        let blank = Image::gen_image_color(img.width as i32, img.height as i32, Color::BLACK);
        let mut tex = rl.load_texture_from_image(thread, &blank).ok()?;
        unsafe {
            raylib::ffi::UpdateTexture(*tex.as_ref(), img.pixels.as_ptr() as *const _);
        }
        match filter {
            TextureFilterMode::Point => {
                tex.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
            }
            TextureFilterMode::Linear => {
                unsafe {
                    raylib::ffi::GenTextureMipmaps(tex.as_mut());
                }
                tex.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_TRILINEAR);
            }
        }
        tex.set_texture_wrap(thread, TextureWrap::TEXTURE_WRAP_REPEAT);
        log::debug!(
            target: "assets",
            "texture {}x{} on unit {} ({:?})",
            img.width,
            img.height,
            unit,
            filter
        );
        Some(Self { tex, unit, filter })
    }

    #[inline]
    pub fn unit(&self) -> i32 {
        self.unit
    }

    #[inline]
    pub fn filter(&self) -> TextureFilterMode {
        self.filter
    }

    /// Makes this the albedo map of the model's first material. Raylib binds
    /// that map to slot 0 on every draw.
    pub fn apply_to(&self, model: &mut Model) {
        if let Some(mat) = model.materials_mut().get_mut(0) {
            mat.set_material_texture(MaterialMapIndex::MATERIAL_MAP_ALBEDO, &self.tex);
        }
    }

    /// Binds to the texture's own unit when it is not slot 0.
    pub fn bind(&self) {
        if self.unit == 0 {
            return;
        }
        let raw: &raylib::ffi::Texture2D = self.tex.as_ref();
        unsafe {
            raylib::ffi::rlActiveTextureSlot(self.unit);
            raylib::ffi::rlEnableTexture(raw.id);
            raylib::ffi::rlActiveTextureSlot(0);
        }
    }
}
