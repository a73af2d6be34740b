// Static content - quest catalog and achievement definitions
pub mod achievements;
pub mod quests;

pub use achievements::{achievement_by_id, Achievement, ACHIEVEMENTS};
pub use quests::{all_quests, quest_by_id, Difficulty, Quest, Quiz, QuizQuestion};
