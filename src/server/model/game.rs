//! Game catalogue domain model: the game types and stakes the club offers.

use crate::model::game::{GameDto, GameRequestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub game_type: String,
    pub limit: String,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            game_type: entity.game_type,
            limit: entity.limit,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            game_type: self.game_type,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveGameParam {
    pub game_type: String,
    pub limit: String,
}

impl From<GameRequestDto> for SaveGameParam {
    fn from(dto: GameRequestDto) -> Self {
        Self {
            game_type: dto.game_type,
            limit: dto.limit,
        }
    }
}
