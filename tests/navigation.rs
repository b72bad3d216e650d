mod common;

use std::sync::Arc;

use common::{sample_todo, sample_user, todo_terminal_state, user_terminal_state, FakeApi};
use todoview::ui::nav::NavState;
use todoview::ui::todos::TodoListState;
use todoview::ui::users::UserListState;
use todoview::vm::{NavModel, UserListViewModel};

#[tokio::test]
async fn selecting_a_user_opens_todos_and_triggers_the_fetch() {
    let api = Arc::new(FakeApi::new());
    api.script_users(Ok(vec![sample_user(1, "Leanne Graham")]));
    api.script_todos(Ok(vec![sample_todo(1, 1, false)]));

    let users = UserListViewModel::new(Arc::clone(&api));
    let nav = NavModel::new(Arc::clone(&api));

    let mut users_rx = users.subscribe();
    let UserListState::Loaded(fetched) = user_terminal_state(&mut users_rx).await else {
        panic!("expected loaded users");
    };

    nav.select_user(&fetched[0]);
    assert_eq!(
        nav.state(),
        NavState::TodosFor {
            user_id: 1,
            user_name: "Leanne Graham".to_string(),
        }
    );
    assert_eq!(api.todo_calls(), vec![1]);

    let mut todos_rx = nav.todos().subscribe();
    assert_eq!(
        todo_terminal_state(&mut todos_rx).await,
        TodoListState::Loaded(vec![sample_todo(1, 1, false)])
    );
}

#[tokio::test]
async fn going_back_leaves_the_user_list_untouched() {
    let api = Arc::new(FakeApi::new());
    api.script_users(Ok(vec![sample_user(1, "Leanne Graham")]));
    api.script_todos(Ok(vec![sample_todo(1, 1, false)]));

    let users = UserListViewModel::new(Arc::clone(&api));
    let nav = NavModel::new(Arc::clone(&api));

    let mut users_rx = users.subscribe();
    let before = user_terminal_state(&mut users_rx).await;

    let UserListState::Loaded(fetched) = before.clone() else {
        panic!("expected loaded users");
    };
    nav.select_user(&fetched[0]);
    nav.go_back();

    assert_eq!(nav.state(), NavState::UserList);
    assert_eq!(users.state(), before);
}

#[tokio::test]
async fn back_retains_stale_todo_state() {
    // Going back deliberately does not reset the todo machine, so a
    // re-selected user briefly sees the previous result.
    let api = Arc::new(FakeApi::new());
    api.script_todos(Ok(vec![sample_todo(1, 1, false)]));

    let nav = NavModel::new(Arc::clone(&api));
    let user = sample_user(1, "Leanne Graham");

    nav.select_user(&user);
    let mut todos_rx = nav.todos().subscribe();
    let loaded = todo_terminal_state(&mut todos_rx).await;

    nav.go_back();
    assert_eq!(nav.todos().state(), loaded);
}

#[tokio::test]
async fn system_back_is_suppressed_on_the_user_list() {
    let api = Arc::new(FakeApi::new());
    let nav = NavModel::new(api);

    nav.back_pressed();
    assert_eq!(nav.state(), NavState::UserList);

    let user = sample_user(1, "Leanne Graham");
    nav.select_user(&user);
    nav.back_pressed();
    assert_eq!(nav.state(), NavState::UserList);
}
