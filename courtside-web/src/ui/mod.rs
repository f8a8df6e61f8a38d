mod app;
pub use app::App;

mod comment_form;
pub use comment_form::CommentForm;

mod comment_node;
pub use comment_node::CommentNode;

mod comment_section;
pub use comment_section::CommentSection;

mod dashboard;
pub use dashboard::Dashboard;

mod follow_button;
pub use follow_button::FollowButton;

mod news_list;
pub use news_list::NewsList;

mod notifications_toggle;
pub use notifications_toggle::NotificationsToggle;

mod player_search;
pub use player_search::PlayerSearch;

mod standings;
pub use standings::Standings;

mod top_players;
pub use top_players::TopPlayers;
