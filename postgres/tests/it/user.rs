use travessia_core::{Error, NewUser, Profile, UserId, WebApiInboundPort, WebApiOutboundPort};

use crate::helper::test;

fn new_user(id: &str, profile: Profile) -> NewUser {
    NewUser {
        id: UserId::new(id),
        email: Some(format!("{id}@travessia.test")),
        display_name: Some(id.to_uppercase()),
        profile,
    }
}

#[tokio::test]
#[ignore = "requires a postgres server"]
async fn test_login_creates_user_with_initial_profile() {
    test(|helper| async move {
        let user = helper
            .db
            .login_user(new_user("ana", Profile::Admin))
            .await
            .unwrap();

        assert_eq!(user.profile, Profile::Admin);
        assert_eq!(helper.db.user(&user.id).await.unwrap(), Some(user));
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a postgres server"]
async fn test_login_keeps_stored_profile_and_refreshes_details() {
    test(|helper| async move {
        helper
            .db
            .login_user(new_user("ana", Profile::Guest))
            .await
            .unwrap();
        helper
            .db
            .update_user_profile(&UserId::new("ana"), Profile::Admin)
            .await
            .unwrap();

        let mut again = new_user("ana", Profile::Guest);
        again.display_name = Some("Ana Souza".into());
        let user = helper.db.login_user(again).await.unwrap();

        assert_eq!(user.profile, Profile::Admin);
        assert_eq!(user.display_name.as_deref(), Some("Ana Souza"));
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a postgres server"]
async fn test_users_are_listed_and_missing_profile_update_fails() {
    test(|helper| async move {
        for id in ["bruno", "ana"] {
            helper
                .db
                .login_user(new_user(id, Profile::Guest))
                .await
                .unwrap();
        }

        let ids: Vec<_> = helper
            .db
            .users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, [UserId::new("ana"), UserId::new("bruno")]);

        let err = helper
            .db
            .update_user_profile(&UserId::new("nobody"), Profile::Admin)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UserNotFound { .. }), "{err:?}");
    })
    .await;
}
