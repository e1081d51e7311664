// 该文件是 Chuangjian （床检） 项目的一部分。
// src/pin/template.rs - 无检测结果时的静态布点模板
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use crate::pin::PinSpec;
use crate::pin::scenario::Scenario;

#[rustfmt::skip]
const BED_OVERVIEW: &[PinSpec] = &[
  PinSpec::new(0.25, 0.3, "Head left corner", "Bed bugs cluster where the mattress meets the headboard.", "Dark spots, shed skins or live bugs along the piping."),
  PinSpec::new(0.75, 0.3, "Head right corner", "Bed bugs cluster where the mattress meets the headboard.", "Dark spots, shed skins or live bugs along the piping."),
  PinSpec::new(0.2, 0.55, "Left side seam", "The long seam is a common daytime hiding line.", "Rusty stains or tiny pale eggs tucked into the stitching."),
  PinSpec::new(0.8, 0.55, "Right side seam", "The long seam is a common daytime hiding line.", "Rusty stains or tiny pale eggs tucked into the stitching."),
  PinSpec::new(0.25, 0.8, "Foot left corner", "Corners are folded fabric and stay undisturbed.", "Clusters of black dots in the fold."),
  PinSpec::new(0.75, 0.8, "Foot right corner", "Corners are folded fabric and stay undisturbed.", "Clusters of black dots in the fold."),
];

#[rustfmt::skip]
const HEADBOARD: &[PinSpec] = &[
  PinSpec::new(0.2, 0.25, "Headboard left edge", "The gap behind the headboard is close to a sleeping host.", "Fecal spotting on the wood or fabric edge."),
  PinSpec::new(0.8, 0.25, "Headboard right edge", "The gap behind the headboard is close to a sleeping host.", "Fecal spotting on the wood or fabric edge."),
  PinSpec::new(0.5, 0.15, "Headboard top", "Upholstered tops and tufting hide bugs in the buttons.", "Bugs or casings around buttons and trim."),
  PinSpec::new(0.5, 0.6, "Wall mounting", "Brackets and screw holes behind the headboard are dark cracks.", "Spotting around brackets and on the wall."),
];

#[rustfmt::skip]
const MATTRESS_SEAMS: &[PinSpec] = &[
  PinSpec::new(0.15, 0.15, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
  PinSpec::new(0.85, 0.15, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
  PinSpec::new(0.15, 0.85, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
  PinSpec::new(0.85, 0.85, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
];

#[rustfmt::skip]
const BOX_SPRING: &[PinSpec] = &[
  PinSpec::new(0.2, 0.2, "Box spring corner", "The fabric dust cover and staples offer deep cover.", "Bugs along the staples and under the corner guards."),
  PinSpec::new(0.8, 0.2, "Box spring corner", "The fabric dust cover and staples offer deep cover.", "Bugs along the staples and under the corner guards."),
  PinSpec::new(0.2, 0.8, "Box spring corner", "The fabric dust cover and staples offer deep cover.", "Bugs along the staples and under the corner guards."),
  PinSpec::new(0.8, 0.8, "Box spring corner", "The fabric dust cover and staples offer deep cover.", "Bugs along the staples and under the corner guards."),
];

#[rustfmt::skip]
const BED_FRAME: &[PinSpec] = &[
  PinSpec::new(0.15, 0.5, "Frame joint left", "Screw holes and joints are tight, dark cracks.", "Shed skins or bugs in the joints and screw holes."),
  PinSpec::new(0.85, 0.5, "Frame joint right", "Screw holes and joints are tight, dark cracks.", "Shed skins or bugs in the joints and screw holes."),
  PinSpec::new(0.5, 0.45, "Center slat", "Slats touch the box spring or mattress underside.", "Spotting where slats meet the rails."),
  PinSpec::new(0.15, 0.85, "Leg left", "Legs connect the frame to the floor and walls.", "Spotting where the leg meets the rail."),
  PinSpec::new(0.85, 0.85, "Leg right", "Legs connect the frame to the floor and walls.", "Spotting where the leg meets the rail."),
];

#[rustfmt::skip]
const NIGHTSTAND: &[PinSpec] = &[
  PinSpec::new(0.3, 0.35, "Drawer joint left", "Drawer joints next to the bed are close to the host.", "Dark spotting in the corner joints."),
  PinSpec::new(0.7, 0.35, "Drawer joint right", "Drawer joints next to the bed are close to the host.", "Dark spotting in the corner joints."),
  PinSpec::new(0.5, 0.8, "Underside", "The underside is dark and rarely cleaned.", "Bugs or skins on the unfinished wood."),
];

#[rustfmt::skip]
const BASEBOARDS: &[PinSpec] = &[
  PinSpec::new(0.15, 0.8, "Baseboard gap left", "Bugs migrate along the gap between baseboard and floor.", "Dark spotting along the top and bottom edge."),
  PinSpec::new(0.5, 0.85, "Baseboard gap center", "Bugs migrate along the gap between baseboard and floor.", "Dark spotting along the top and bottom edge."),
  PinSpec::new(0.85, 0.8, "Baseboard gap right", "Bugs migrate along the gap between baseboard and floor.", "Dark spotting along the top and bottom edge."),
  PinSpec::new(0.5, 0.6, "Carpet edge", "Carpet tack strips hide bugs near the wall.", "Shed skins where carpet meets the baseboard."),
];

#[rustfmt::skip]
const COUCH: &[PinSpec] = &[
  PinSpec::new(0.15, 0.45, "Left arm crevice", "The gap between arm and cushion is a resting spot.", "Dark spots or skins deep in the crevice."),
  PinSpec::new(0.4, 0.55, "Cushion seam", "Cushion seams behave like mattress seams.", "Eggs and spotting along the welt cord."),
  PinSpec::new(0.85, 0.45, "Right arm crevice", "The gap between arm and cushion is a resting spot.", "Dark spots or skins deep in the crevice."),
  PinSpec::new(0.5, 0.85, "Skirt and underside", "The skirt and lining hide bugs during the day.", "Bugs on the underside fabric and staples."),
];

#[rustfmt::skip]
const CHAIR: &[PinSpec] = &[
  PinSpec::new(0.5, 0.35, "Back to seat joint", "Upholstered joints are tight, dark gaps.", "Spotting in the joint line."),
  PinSpec::new(0.5, 0.55, "Seat seam", "The seat seam is close to a resting person.", "Eggs or skins along the stitching."),
  PinSpec::new(0.35, 0.85, "Legs and glides", "Legs and glides hide bugs near the floor.", "Bugs in screw holes and under glides."),
];

#[rustfmt::skip]
const LUGGAGE: &[PinSpec] = &[
  PinSpec::new(0.5, 0.2, "Zipper track", "Luggage carries bugs between rooms and trips.", "Bugs or eggs in the zipper fold."),
  PinSpec::new(0.2, 0.5, "Side seam", "Piped seams hide bugs like a mattress edge.", "Spotting along the piping."),
  PinSpec::new(0.8, 0.5, "Side seam", "Piped seams hide bugs like a mattress edge.", "Spotting along the piping."),
  PinSpec::new(0.5, 0.85, "Wheel housing", "The base rests on hotel floors and racks.", "Bugs around wheels and feet."),
];

#[rustfmt::skip]
const CURTAINS: &[PinSpec] = &[
  PinSpec::new(0.3, 0.15, "Curtain pleats", "Pleats near the rod are folded, dark and undisturbed.", "Spotting inside the folds."),
  PinSpec::new(0.7, 0.15, "Rod bracket", "Hardware holes lead into the wall.", "Bugs or skins around the bracket."),
  PinSpec::new(0.5, 0.9, "Hem", "Hems that touch the floor are an easy climbing route.", "Eggs along the hem stitching."),
];

#[rustfmt::skip]
const WALL_OUTLETS: &[PinSpec] = &[
  PinSpec::new(0.5, 0.4, "Outlet cover edge", "Gaps around covers connect to wall voids.", "Dark spotting around the cover plate."),
  PinSpec::new(0.5, 0.7, "Switch plate edge", "Gaps around covers connect to wall voids.", "Dark spotting around the cover plate."),
];

/// 场景未知时使用的四角兜底
#[rustfmt::skip]
pub const GENERIC: &[PinSpec] = &[
  PinSpec::new(0.2, 0.2, "Top left area", "Check folds, seams and cracks in this area.", "Dark spots, shed skins, eggs or live bugs."),
  PinSpec::new(0.8, 0.2, "Top right area", "Check folds, seams and cracks in this area.", "Dark spots, shed skins, eggs or live bugs."),
  PinSpec::new(0.2, 0.8, "Bottom left area", "Check folds, seams and cracks in this area.", "Dark spots, shed skins, eggs or live bugs."),
  PinSpec::new(0.8, 0.8, "Bottom right area", "Check folds, seams and cracks in this area.", "Dark spots, shed skins, eggs or live bugs."),
];

pub fn template(scenario: Scenario) -> &'static [PinSpec] {
  match scenario {
    Scenario::BedOverview => BED_OVERVIEW,
    Scenario::Headboard => HEADBOARD,
    Scenario::MattressSeams => MATTRESS_SEAMS,
    Scenario::BoxSpring => BOX_SPRING,
    Scenario::BedFrame => BED_FRAME,
    Scenario::Nightstand => NIGHTSTAND,
    Scenario::Baseboards => BASEBOARDS,
    Scenario::Couch => COUCH,
    Scenario::Chair => CHAIR,
    Scenario::Luggage => LUGGAGE,
    Scenario::Curtains => CURTAINS,
    Scenario::WallOutlets => WALL_OUTLETS,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_scenario_has_a_template() {
    for scenario in Scenario::ALL {
      assert!(!template(scenario).is_empty(), "{scenario:?}");
    }
  }

  #[test]
  fn generic_fallback_is_four_corners() {
    let corners: Vec<(f32, f32)> = GENERIC.iter().map(|spec| (spec.x, spec.y)).collect();
    assert_eq!(corners, vec![(0.2, 0.2), (0.8, 0.2), (0.2, 0.8), (0.8, 0.8)]);
  }
}
