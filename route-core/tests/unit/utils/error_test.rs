use super::*;
use std::io::{Error, ErrorKind};

fn fail_with_io_error() -> GenericResult<()> {
    let written: Result<(), Error> = Err(Error::new(ErrorKind::BrokenPipe, "pipe is closed"));
    written?;

    Ok(())
}

#[test]
fn can_convert_from_messages() {
    assert_eq!(GenericError::from("max-passes is zero"), GenericError::from("max-passes is zero".to_string()));
    assert_eq!(GenericError::from("cannot read config").to_string(), "cannot read config");
}

#[test]
fn can_propagate_io_error() {
    let err = fail_with_io_error().unwrap_err();

    assert_eq!(err.to_string(), "io error: pipe is closed");
}
