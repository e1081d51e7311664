// 该文件是 Chuangjian （床检） 项目的一部分。
// src/model/labels.rs - COCO 类别表与家具分类
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

/// COCO 数据集类别名称
#[rustfmt::skip]
pub const COCO_CLASSES: [&str; 80] = [
  "person", "bicycle", "car", "motorcycle", "airplane", "bus", "train", "truck", "boat",
  "traffic light", "fire hydrant", "stop sign", "parking meter", "bench", "bird", "cat", "dog",
  "horse", "sheep", "cow", "elephant", "bear", "zebra", "giraffe", "backpack", "umbrella",
  "handbag", "tie", "suitcase", "frisbee", "skis", "snowboard", "sports ball", "kite",
  "baseball bat", "baseball glove", "skateboard", "surfboard", "tennis racket", "bottle",
  "wine glass", "cup", "fork", "knife", "spoon", "bowl", "banana", "apple", "sandwich", "orange",
  "broccoli", "carrot", "hot dog", "pizza", "donut", "cake", "chair", "couch", "potted plant",
  "bed", "dining table", "toilet", "tv", "laptop", "mouse", "remote", "keyboard", "cell phone",
  "microwave", "oven", "toaster", "sink", "refrigerator", "book", "clock", "vase", "scissors",
  "teddy bear", "hair drier", "toothbrush",
];

const BACKPACK: u32 = 24;
const HANDBAG: u32 = 26;
const SUITCASE: u32 = 28;
const CHAIR: u32 = 56;
const COUCH: u32 = 57;
const BED: u32 = 59;
const DINING_TABLE: u32 = 60;

/// 与床虱检查相关的类别
pub const RELEVANT_CLASSES: [u32; 7] = [
  BACKPACK,
  HANDBAG,
  SUITCASE,
  CHAIR,
  COUCH,
  BED,
  DINING_TABLE,
];

pub fn label_name(class_id: u32) -> &'static str {
  COCO_CLASSES.get(class_id as usize).copied().unwrap_or("unknown")
}

/// 布点时使用的家具类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FurnitureKind {
  Bed,
  Couch,
  Chair,
  Table,
  Luggage,
  Other,
}

impl FurnitureKind {
  pub fn from_class_id(class_id: u32) -> Self {
    match class_id {
      BED => FurnitureKind::Bed,
      COUCH => FurnitureKind::Couch,
      CHAIR => FurnitureKind::Chair,
      DINING_TABLE => FurnitureKind::Table,
      SUITCASE | BACKPACK | HANDBAG => FurnitureKind::Luggage,
      _ => FurnitureKind::Other,
    }
  }
}
