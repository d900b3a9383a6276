//! Password-authenticated SSH transport built on libssh2.

use std::io::Read;
use std::net::{IpAddr, SocketAddr, TcpStream};

use ssh2::Session as RawSession;
use tracing::debug;

use wayfindr_common::config::WalkConfig;
use wayfindr_common::error::SessionError;

use super::{Session, SessionTransport};

const SSH_PORT: u16 = 22;

pub struct SshTransport;

impl SessionTransport for SshTransport {
    fn connect(
        &self,
        host: IpAddr,
        config: &WalkConfig,
    ) -> Result<Box<dyn Session>, SessionError> {
        let addr = SocketAddr::new(host, SSH_PORT);
        let tcp = TcpStream::connect_timeout(&addr, config.connect_timeout)
            .map_err(|e| SessionError::connect(host, e))?;
        let mut raw = RawSession::new().map_err(|e| SessionError::connect(host, e))?;
        raw.set_tcp_stream(tcp);
        raw.handshake().map_err(|e| SessionError::connect(host, e))?;
        raw.userauth_password(&config.username, &config.password)
            .map_err(|e| SessionError::connect(host, e))?;

        debug!("session established with {host}");
        Ok(Box::new(SshSession { raw, peer: host }))
    }
}

struct SshSession {
    raw: RawSession,
    peer: IpAddr,
}

impl Session for SshSession {
    fn execute(&mut self, command: &str) -> Result<String, SessionError> {
        let mut channel = self
            .raw
            .channel_session()
            .map_err(|e| SessionError::transport(self.peer, e))?;
        channel
            .exec(command)
            .map_err(|e| SessionError::transport(self.peer, e))?;

        let mut output = String::new();
        channel
            .read_to_string(&mut output)
            .map_err(|e| SessionError::transport(self.peer, e))?;
        let _ = channel.wait_close();

        Ok(output)
    }

    fn is_alive(&mut self) -> bool {
        self.raw.keepalive_send().is_ok()
    }

    fn peer_addr(&self) -> IpAddr {
        self.peer
    }
}
