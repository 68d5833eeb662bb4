//! Test fixtures shared by service tests.

use std::io;

use jiff::Timestamp;
use lavanya::{
    billing::{BillingDetails, PaymentMethod},
    items::{ItemId, NewCartItem},
};
use rust_decimal::Decimal;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

pub(crate) fn product(id: u64, price: i64) -> NewCartItem {
    NewCartItem {
        id: ItemId::from(id),
        name: format!("Product {id}"),
        price: Decimal::from(price),
        category: "Skin".to_string(),
        image: format!("https://img.example/{id}.jpg"),
    }
}

pub(crate) fn billing() -> BillingDetails {
    BillingDetails {
        name: "Sadia Islam".to_string(),
        phone: "01712345678".to_string(),
        address: "Road 27, Gulshan 1, Dhaka".to_string(),
        payment_method: PaymentMethod::CashOnDelivery,
        transaction_id: None,
    }
}

pub(crate) fn timestamp(millis: i64) -> Timestamp {
    Timestamp::from_millisecond(millis).unwrap_or(Timestamp::UNIX_EPOCH)
}

/// One-shot HTTP server answering a single request with a canned response.
pub(crate) struct StubServer {
    pub(crate) base_url: String,
    request: JoinHandle<io::Result<String>>,
}

impl StubServer {
    pub(crate) async fn respond(status: &'static str, body: &'static str) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let request = read_request(&mut socket).await?;

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await?;
            socket.shutdown().await?;

            Ok::<_, io::Error>(request)
        });

        Ok(Self { base_url, request })
    }

    /// The raw request the server received.
    pub(crate) async fn request(self) -> io::Result<String> {
        self.request.await.map_err(io::Error::other)?
    }
}

async fn read_request(socket: &mut TcpStream) -> io::Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let read = socket.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&buffer);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buffer.len() >= end + 4 + length {
                break;
            }
        }
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
