pub use anyhow::{ensure, format_err, Context as _, Error, Result};
pub use approx::AbsDiffEq;
pub use bbox::{prelude::*, Transform, XYWH, XYXY};
pub use image::{imageops, Rgb, RgbImage};
pub use log::{debug, trace, warn};
pub use noisy_float::prelude::*;
pub use rand::prelude::*;
pub use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
pub use std::{
    fmt::{self, Display, Formatter},
    path::Path,
};
