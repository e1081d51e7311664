// 该文件是 Chuangjian （床检） 项目的一部分。
// src/pin/scenario.rs - 检查步骤（场景）定义
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

pub const DEFAULT_MAX_PINS: usize = 4;
pub const BED_MAX_PINS: usize = 6;

/// 已知的检查步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
  BedOverview,
  Headboard,
  MattressSeams,
  BoxSpring,
  BedFrame,
  Nightstand,
  Baseboards,
  Couch,
  Chair,
  Luggage,
  Curtains,
  WallOutlets,
}

impl Scenario {
  pub const ALL: [Scenario; 12] = [
    Scenario::BedOverview,
    Scenario::Headboard,
    Scenario::MattressSeams,
    Scenario::BoxSpring,
    Scenario::BedFrame,
    Scenario::Nightstand,
    Scenario::Baseboards,
    Scenario::Couch,
    Scenario::Chair,
    Scenario::Luggage,
    Scenario::Curtains,
    Scenario::WallOutlets,
  ];

  pub fn key(&self) -> &'static str {
    match self {
      Scenario::BedOverview => "BED_OVERVIEW",
      Scenario::Headboard => "HEADBOARD",
      Scenario::MattressSeams => "MATTRESS_SEAMS",
      Scenario::BoxSpring => "BOX_SPRING",
      Scenario::BedFrame => "BED_FRAME",
      Scenario::Nightstand => "NIGHTSTAND",
      Scenario::Baseboards => "BASEBOARDS",
      Scenario::Couch => "COUCH",
      Scenario::Chair => "CHAIR",
      Scenario::Luggage => "LUGGAGE",
      Scenario::Curtains => "CURTAINS",
      Scenario::WallOutlets => "WALL_OUTLETS",
    }
  }

  /// 大小写不敏感
  pub fn from_key(key: &str) -> Option<Self> {
    let key = key.trim();
    Scenario::ALL
      .into_iter()
      .find(|scenario| scenario.key().eq_ignore_ascii_case(key))
  }

  pub fn is_bed_context(&self) -> bool {
    match self {
      Scenario::BedOverview
      | Scenario::Headboard
      | Scenario::MattressSeams
      | Scenario::BoxSpring
      | Scenario::BedFrame => true,
      Scenario::Nightstand
      | Scenario::Baseboards
      | Scenario::Couch
      | Scenario::Chair
      | Scenario::Luggage
      | Scenario::Curtains
      | Scenario::WallOutlets => false,
    }
  }

  /// 只展示一个角点、提示用户在其余角点重复检查的步骤
  pub fn is_single_corner(&self) -> bool {
    matches!(self, Scenario::MattressSeams | Scenario::BoxSpring)
  }
}

/// 密度限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
  SingleCorner,
  Capped(usize),
}

/// 调用方传入的场景键，未知键同样合法，走通用兜底
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioKey {
  Known(Scenario),
  Unknown(String),
}

impl ScenarioKey {
  pub fn parse(key: &str) -> Self {
    match Scenario::from_key(key) {
      Some(scenario) => ScenarioKey::Known(scenario),
      None => ScenarioKey::Unknown(key.to_string()),
    }
  }

  pub fn scenario(&self) -> Option<Scenario> {
    match self {
      ScenarioKey::Known(scenario) => Some(*scenario),
      ScenarioKey::Unknown(_) => None,
    }
  }

  pub fn density(&self) -> Density {
    match self {
      ScenarioKey::Known(scenario) if scenario.is_single_corner() => Density::SingleCorner,
      ScenarioKey::Known(scenario) if scenario.is_bed_context() => Density::Capped(BED_MAX_PINS),
      ScenarioKey::Known(_) => Density::Capped(DEFAULT_MAX_PINS),
      ScenarioKey::Unknown(key) => {
        let key = key.to_ascii_uppercase();
        if key
          .split('_')
          .any(|token| token == "BED" || token == "MATTRESS")
        {
          Density::Capped(BED_MAX_PINS)
        } else {
          Density::Capped(DEFAULT_MAX_PINS)
        }
      }
    }
  }

  pub fn max_pins(&self) -> usize {
    match self.density() {
      Density::SingleCorner => 1,
      Density::Capped(max) => max,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keys_round_trip() {
    for scenario in Scenario::ALL {
      assert_eq!(Scenario::from_key(scenario.key()), Some(scenario));
    }
    assert_eq!(Scenario::from_key("mattress_seams"), Some(Scenario::MattressSeams));
    assert_eq!(Scenario::from_key("KITCHEN"), None);
  }

  #[test]
  fn density_classes() {
    assert_eq!(ScenarioKey::parse("MATTRESS_SEAMS").density(), Density::SingleCorner);
    assert_eq!(ScenarioKey::parse("BED_OVERVIEW").max_pins(), 6);
    assert_eq!(ScenarioKey::parse("COUCH").max_pins(), 4);
    assert_eq!(ScenarioKey::parse("GUEST_BED_LINENS").max_pins(), 6);
    assert_eq!(ScenarioKey::parse("Closet").max_pins(), 4);
    assert_eq!(ScenarioKey::parse("spare_mattress").max_pins(), 6);
  }

  #[test]
  fn bed_context_matches_whole_words_only() {
    assert_eq!(ScenarioKey::parse("EMBEDDED_WIRING").max_pins(), 4);
    assert_eq!(ScenarioKey::parse("BEDROOM_DOOR").max_pins(), 4);
    assert_eq!(ScenarioKey::parse("MATTRESSTOPPER").max_pins(), 4);
    assert_eq!(ScenarioKey::parse("bunk_bed").max_pins(), 6);
  }
}
