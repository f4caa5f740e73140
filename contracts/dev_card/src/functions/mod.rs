// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

pub mod change_description;
pub mod change_work_status;
pub mod create_card;
pub mod destroy_card;
pub mod get_card;
pub mod get_registry;
pub mod initialize;
pub mod utils;
