use crate::server::{
    data::schedule::ScheduleRepository,
    model::schedule::{SaveScheduleParam, ScheduleGameParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn save_param(day: &str, games: &[(&str, &str)]) -> SaveScheduleParam {
    SaveScheduleParam {
        day: day.to_string(),
        time: "7:00 PM".to_string(),
        description: Some("Weekly game".to_string()),
        games: games
            .iter()
            .map(|(game_type, limit)| ScheduleGameParam {
                game_type: game_type.to_string(),
                limit: limit.to_string(),
            })
            .collect(),
    }
}
