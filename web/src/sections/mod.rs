// App sections

mod header;
mod input_panel;
mod model_notice;
mod review_list;
mod sentiment_chart;

pub use header::Header;
pub use input_panel::InputPanel;
pub use model_notice::ModelNotice;
pub use review_list::ReviewList;
pub use sentiment_chart::SentimentChart;
