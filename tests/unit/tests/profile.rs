use anyhow::Result;
use passforge_password::profile::Profile;
use tempfile::NamedTempFile;

#[test]
fn profile_save_load() -> Result<()> {
    let temp = NamedTempFile::new()?;
    let profile = Profile {
        name: Some("kenreinhart".to_owned()),
        nick: Some("Kent".to_owned()),
        dob: Some("1990".to_owned()),
    };
    profile.save(temp.path())?;

    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp.path())?)?;
    assert_eq!("kenreinhart", value["name"]);
    assert_eq!("Kent", value["nick"]);
    assert_eq!("1990", value["dob"]);

    let loaded = Profile::load(temp.path())?;
    assert_eq!(profile, loaded);
    Ok(())
}

#[test]
fn profile_partial() -> Result<()> {
    let temp = NamedTempFile::new()?;
    std::fs::write(temp.path(), r#"{"name": "andi"}"#)?;

    let loaded = Profile::load(temp.path())?;
    assert_eq!(Some("andi".to_owned()), loaded.name);
    assert!(loaded.nick.is_none());
    assert!(loaded.dob.is_none());
    Ok(())
}

#[test]
fn profile_sanitized() {
    let profile = Profile {
        name: Some("ken reinhart".to_owned()),
        nick: None,
        dob: Some("12 03 1995".to_owned()),
    }
    .sanitized();
    assert_eq!(Some("kenreinhart".to_owned()), profile.name);
    assert!(profile.nick.is_none());
    assert_eq!(Some("12031995".to_owned()), profile.dob);
}

#[test]
fn profile_invalid_json() -> Result<()> {
    let temp = NamedTempFile::new()?;
    std::fs::write(temp.path(), "not json")?;
    assert!(Profile::load(temp.path()).is_err());
    Ok(())
}
