// 该文件是 Chuangjian （床检） 项目的一部分。
// src/pin/layout.rs - 基于检测框的布点偏移表
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

//! 偏移量为检测框自身宽高的比例，原点为框的左上角。

use crate::model::FurnitureKind;
use crate::pin::PinSpec;
use crate::pin::scenario::Scenario;

const NONE: &[PinSpec] = &[];

#[rustfmt::skip]
const BED_OVERVIEW: &[PinSpec] = &[
  PinSpec::new(0.15, 0.1, "Head left corner", "Bed bugs cluster where the mattress meets the headboard.", "Dark spots, shed skins or live bugs along the piping."),
  PinSpec::new(0.85, 0.1, "Head right corner", "Bed bugs cluster where the mattress meets the headboard.", "Dark spots, shed skins or live bugs along the piping."),
  PinSpec::new(0.5, 0.45, "Side seam", "The long seam is a common daytime hiding line.", "Rusty stains or tiny pale eggs tucked into the stitching."),
  PinSpec::new(0.15, 0.9, "Foot left corner", "Corners are folded fabric and stay undisturbed.", "Clusters of black dots in the fold."),
  PinSpec::new(0.85, 0.9, "Foot right corner", "Corners are folded fabric and stay undisturbed.", "Clusters of black dots in the fold."),
];

#[rustfmt::skip]
const BED_HEADBOARD: &[PinSpec] = &[
  PinSpec::new(0.2, 0.15, "Headboard left edge", "The gap behind the headboard is close to a sleeping host.", "Fecal spotting on the wood or fabric edge."),
  PinSpec::new(0.8, 0.15, "Headboard right edge", "The gap behind the headboard is close to a sleeping host.", "Fecal spotting on the wood or fabric edge."),
  PinSpec::new(0.5, 0.05, "Headboard top", "Upholstered tops and tufting hide bugs in the buttons.", "Bugs or casings around buttons and trim."),
];

#[rustfmt::skip]
const BED_MATTRESS_SEAMS: &[PinSpec] = &[
  PinSpec::new(0.08, 0.08, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
  PinSpec::new(0.92, 0.08, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
  PinSpec::new(0.08, 0.92, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
  PinSpec::new(0.92, 0.92, "Mattress corner seam", "Seams and tags are the most common harborage on a mattress.", "Peel back the piping and look for eggs, skins and dark spots."),
];

#[rustfmt::skip]
const BED_BOX_SPRING: &[PinSpec] = &[
  PinSpec::new(0.1, 0.85, "Box spring corner", "The fabric dust cover and staples offer deep cover.", "Bugs along the staples and under the corner guards."),
  PinSpec::new(0.9, 0.85, "Box spring corner", "The fabric dust cover and staples offer deep cover.", "Bugs along the staples and under the corner guards."),
  PinSpec::new(0.5, 0.95, "Box spring underside", "The underside is rarely disturbed.", "Dark spotting on the dust cover."),
];

#[rustfmt::skip]
const BED_FRAME: &[PinSpec] = &[
  PinSpec::new(0.05, 0.6, "Frame joint left", "Screw holes and joints are tight, dark cracks.", "Shed skins or bugs in the joints and screw holes."),
  PinSpec::new(0.95, 0.6, "Frame joint right", "Screw holes and joints are tight, dark cracks.", "Shed skins or bugs in the joints and screw holes."),
  PinSpec::new(0.05, 0.95, "Leg left", "Legs connect the frame to the floor and walls.", "Spotting where the leg meets the rail."),
  PinSpec::new(0.95, 0.95, "Leg right", "Legs connect the frame to the floor and walls.", "Spotting where the leg meets the rail."),
];

#[rustfmt::skip]
const COUCH: &[PinSpec] = &[
  PinSpec::new(0.05, 0.45, "Left arm crevice", "The gap between arm and cushion is a resting spot.", "Dark spots or skins deep in the crevice."),
  PinSpec::new(0.25, 0.55, "Cushion seam", "Cushion seams behave like mattress seams.", "Eggs and spotting along the welt cord."),
  PinSpec::new(0.75, 0.55, "Cushion seam", "Cushion seams behave like mattress seams.", "Eggs and spotting along the welt cord."),
  PinSpec::new(0.95, 0.45, "Right arm crevice", "The gap between arm and cushion is a resting spot.", "Dark spots or skins deep in the crevice."),
  PinSpec::new(0.5, 0.95, "Skirt and underside", "The skirt and lining hide bugs during the day.", "Bugs on the underside fabric and staples."),
];

#[rustfmt::skip]
const CHAIR: &[PinSpec] = &[
  PinSpec::new(0.5, 0.3, "Back to seat joint", "Upholstered joints are tight, dark gaps.", "Spotting in the joint line."),
  PinSpec::new(0.5, 0.55, "Seat seam", "The seat seam is close to a resting person.", "Eggs or skins along the stitching."),
  PinSpec::new(0.15, 0.95, "Front left leg", "Legs and glides hide bugs near the floor.", "Bugs in screw holes and under glides."),
  PinSpec::new(0.85, 0.95, "Front right leg", "Legs and glides hide bugs near the floor.", "Bugs in screw holes and under glides."),
];

#[rustfmt::skip]
const TABLE_NIGHTSTAND: &[PinSpec] = &[
  PinSpec::new(0.2, 0.3, "Drawer joint left", "Drawer joints next to the bed are close to the host.", "Dark spotting in the corner joints."),
  PinSpec::new(0.8, 0.3, "Drawer joint right", "Drawer joints next to the bed are close to the host.", "Dark spotting in the corner joints."),
  PinSpec::new(0.5, 0.9, "Underside", "The underside is dark and rarely cleaned.", "Bugs or skins on the unfinished wood."),
];

#[rustfmt::skip]
const LUGGAGE: &[PinSpec] = &[
  PinSpec::new(0.5, 0.1, "Zipper track", "Luggage carries bugs between rooms and trips.", "Bugs or eggs in the zipper fold."),
  PinSpec::new(0.1, 0.5, "Side seam", "Piped seams hide bugs like a mattress edge.", "Spotting along the piping."),
  PinSpec::new(0.9, 0.5, "Side seam", "Piped seams hide bugs like a mattress edge.", "Spotting along the piping."),
  PinSpec::new(0.5, 0.95, "Wheel housing", "The base rests on hotel floors and racks.", "Bugs around wheels and feet."),
];

#[rustfmt::skip]
const OTHER_FURNITURE: &[PinSpec] = &[
  PinSpec::new(0.1, 0.1, "Top left edge", "Edges and joints are where bugs shelter.", "Dark spots or shed skins."),
  PinSpec::new(0.9, 0.1, "Top right edge", "Edges and joints are where bugs shelter.", "Dark spots or shed skins."),
  PinSpec::new(0.5, 0.9, "Base", "The base connects the object to the floor.", "Bugs or spotting at floor level."),
];

/// 按家具类别与场景选择偏移表；空表表示该组合没有布点规则
pub fn detection_offsets(kind: FurnitureKind, scenario: Scenario) -> &'static [PinSpec] {
  match kind {
    FurnitureKind::Bed => match scenario {
      Scenario::BedOverview => BED_OVERVIEW,
      Scenario::Headboard => BED_HEADBOARD,
      Scenario::MattressSeams => BED_MATTRESS_SEAMS,
      Scenario::BoxSpring => BED_BOX_SPRING,
      Scenario::BedFrame => BED_FRAME,
      Scenario::Nightstand
      | Scenario::Baseboards
      | Scenario::Couch
      | Scenario::Chair
      | Scenario::Luggage
      | Scenario::Curtains
      | Scenario::WallOutlets => NONE,
    },
    FurnitureKind::Couch => match scenario {
      Scenario::Couch => COUCH,
      Scenario::Chair => CHAIR,
      Scenario::BedOverview
      | Scenario::Headboard
      | Scenario::MattressSeams
      | Scenario::BoxSpring
      | Scenario::BedFrame
      | Scenario::Nightstand
      | Scenario::Baseboards
      | Scenario::Luggage
      | Scenario::Curtains
      | Scenario::WallOutlets => NONE,
    },
    FurnitureKind::Chair => match scenario {
      Scenario::Chair => CHAIR,
      Scenario::BedOverview
      | Scenario::Headboard
      | Scenario::MattressSeams
      | Scenario::BoxSpring
      | Scenario::BedFrame
      | Scenario::Nightstand
      | Scenario::Baseboards
      | Scenario::Couch
      | Scenario::Luggage
      | Scenario::Curtains
      | Scenario::WallOutlets => NONE,
    },
    FurnitureKind::Table => match scenario {
      Scenario::Nightstand => TABLE_NIGHTSTAND,
      Scenario::BedOverview
      | Scenario::Headboard
      | Scenario::MattressSeams
      | Scenario::BoxSpring
      | Scenario::BedFrame
      | Scenario::Baseboards
      | Scenario::Couch
      | Scenario::Chair
      | Scenario::Luggage
      | Scenario::Curtains
      | Scenario::WallOutlets => NONE,
    },
    FurnitureKind::Luggage => match scenario {
      Scenario::Luggage => LUGGAGE,
      Scenario::BedOverview
      | Scenario::Headboard
      | Scenario::MattressSeams
      | Scenario::BoxSpring
      | Scenario::BedFrame
      | Scenario::Nightstand
      | Scenario::Baseboards
      | Scenario::Couch
      | Scenario::Chair
      | Scenario::Curtains
      | Scenario::WallOutlets => NONE,
    },
    FurnitureKind::Other => match scenario {
      Scenario::Nightstand | Scenario::Couch | Scenario::Chair | Scenario::Luggage => {
        OTHER_FURNITURE
      }
      Scenario::BedOverview
      | Scenario::Headboard
      | Scenario::MattressSeams
      | Scenario::BoxSpring
      | Scenario::BedFrame
      | Scenario::Baseboards
      | Scenario::Curtains
      | Scenario::WallOutlets => NONE,
    },
  }
}
