//! Blue Marble Next Generation monthly imagery targets.
//!
//! NASA publishes each month of the 2004 composite under its own
//! imagerecords directory. The global image is cut into 4 longitude
//! bands (A-D) by 2 latitude bands (1-2), so a full set is 96 tiles.

use std::path::Path;

use super::DownloadTarget;

const BASE_PATH: &str = "https://eoimages.gsfc.nasa.gov/images/imagerecords";

/// Month number to imagerecords directory fragment.
const MONTH_BASE_PATHS: [(u32, &str); 12] = [
    (1, "/73000/73938/"),
    (2, "/73000/73967/"),
    (3, "/73000/73992/"),
    (4, "/74000/74017/"),
    (5, "/74000/74042/"),
    (6, "/76000/76487/"),
    (7, "/74000/74092/"),
    (8, "/74000/74117/"),
    (9, "/74000/74142/"),
    (10, "/74000/74167/"),
    (11, "/74000/74192/"),
    (12, "/74000/74218/"),
];

const LONGITUDE_BANDS: [char; 4] = ['A', 'B', 'C', 'D'];
const LATITUDE_BANDS: [char; 2] = ['1', '2'];

/// Enumerates all 96 monthly imagery tiles in deterministic order:
/// months in table order, then longitude bands, then latitude bands.
/// Destinations land under `<output>/month<NN>/`.
pub fn bmng_targets(output_dir: &Path) -> Vec<DownloadTarget> {
    let mut targets =
        Vec::with_capacity(MONTH_BASE_PATHS.len() * LONGITUDE_BANDS.len() * LATITUDE_BANDS.len());
    for (month, directory) in MONTH_BASE_PATHS {
        for lon in LONGITUDE_BANDS {
            for lat in LATITUDE_BANDS {
                let filename = format!("world.2004{:02}.3x21600x21600.{}{}.png", month, lon, lat);
                targets.push(DownloadTarget {
                    index: targets.len() + 1,
                    dest: output_dir
                        .join(format!("month{:02}", month))
                        .join(&filename),
                    url: format!("{}{}{}", BASE_PATH, directory, filename),
                });
            }
        }
    }
    targets
}
