//! Schedule domain models and parameters.
//!
//! A schedule is a recurring slot (day + time) that owns the list of games spread
//! on it. Games are always written as a full list; there is no per-game update.

use crate::model::schedule::{ScheduleDto, ScheduleGameDto, ScheduleRequestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGame {
    pub id: String,
    pub schedule_id: String,
    pub game_type: String,
    pub limit: String,
}

impl ScheduleGame {
    pub fn from_entity(entity: entity::schedule_game::Model) -> Self {
        Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            game_type: entity.game_type,
            limit: entity.limit,
        }
    }

    pub fn into_dto(self) -> ScheduleGameDto {
        ScheduleGameDto {
            id: self.id,
            schedule_id: self.schedule_id,
            game_type: self.game_type,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: String,
    pub day: String,
    pub time: String,
    pub description: Option<String>,
    pub games: Vec<ScheduleGame>,
}

impl Schedule {
    /// Converts a schedule entity together with its loaded games.
    pub fn from_entity(
        entity: entity::schedule::Model,
        games: Vec<entity::schedule_game::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            day: entity.day,
            time: entity.time,
            description: entity.description,
            games: games.into_iter().map(ScheduleGame::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            day: self.day,
            time: self.time,
            description: self.description,
            games: self.games.into_iter().map(|g| g.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleGameParam {
    pub game_type: String,
    pub limit: String,
}

/// Parameters for creating a schedule or replacing an existing one.
#[derive(Debug, Clone)]
pub struct SaveScheduleParam {
    pub day: String,
    pub time: String,
    pub description: Option<String>,
    pub games: Vec<ScheduleGameParam>,
}

impl SaveScheduleParam {
    pub fn from_dto(dto: ScheduleRequestDto) -> Self {
        Self {
            day: dto.day,
            time: dto.time,
            description: dto.description,
            games: dto
                .games
                .into_iter()
                .map(|g| ScheduleGameParam {
                    game_type: g.game_type,
                    limit: g.limit,
                })
                .collect(),
        }
    }
}
