pub mod bert;

pub use bert::BertSentimentModel;
